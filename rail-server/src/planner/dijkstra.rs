//! Dijkstra shortest-path search.
//!
//! Uses a binary heap without decrease-key: a station is pushed again each
//! time its tentative distance improves, and stale entries are skipped when
//! popped.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::domain::{Distance, StationId};
use crate::network::{Network, RoutingError};

use super::path::Path;

/// Finds the shortest path between two stations of a network.
///
/// Implementations must not mutate the network and keep all working state
/// local to the call, so one network can serve concurrent searches.
pub trait PathFinder {
    /// Find the minimum-distance path from `from` to `to`.
    ///
    /// Fails with [`RoutingError::NoRouteFound`] when `from == to` or when
    /// `to` is unreachable.
    fn find_path(
        &self,
        network: &Network,
        from: &StationId,
        to: &StationId,
    ) -> Result<Path, RoutingError>;
}

/// Classic Dijkstra over the network's adjacency map.
///
/// Only stations registered in the network are visited. Ties between
/// equal-length routes are settled by heap insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPathFinder;

impl DijkstraPathFinder {
    pub fn new() -> Self {
        Self
    }
}

/// Heap entry: tentative distance plus insertion sequence for tie-breaking.
#[derive(Debug)]
struct QueueEntry {
    distance: f64,
    seq: u64,
    station: StationId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PathFinder for DijkstraPathFinder {
    fn find_path(
        &self,
        network: &Network,
        from: &StationId,
        to: &StationId,
    ) -> Result<Path, RoutingError> {
        let no_route = || RoutingError::NoRouteFound {
            from: from.clone(),
            to: to.clone(),
        };

        if from == to || !network.has_station(from) {
            return Err(no_route());
        }

        let mut distances: HashMap<StationId, f64> = network
            .station_ids()
            .into_iter()
            .map(|id| (id, f64::INFINITY))
            .collect();
        let mut previous: HashMap<StationId, StationId> = HashMap::new();
        let mut visited: HashSet<StationId> = HashSet::new();

        distances.insert(from.clone(), 0.0);

        let mut seq = 0u64;
        let mut queue = BinaryHeap::new();
        queue.push(Reverse(QueueEntry {
            distance: 0.0,
            seq,
            station: from.clone(),
        }));

        while let Some(Reverse(current)) = queue.pop() {
            if !visited.insert(current.station.clone()) {
                continue;
            }

            if &current.station == to {
                break;
            }

            for (neighbor, edge) in network.adjacent(&current.station) {
                if visited.contains(neighbor) {
                    continue;
                }
                // Dangling segment endpoints have no tentative distance.
                let Some(&known) = distances.get(neighbor) else {
                    continue;
                };

                let candidate = current.distance + edge.kilometers();
                if candidate < known {
                    distances.insert(neighbor.clone(), candidate);
                    previous.insert(neighbor.clone(), current.station.clone());
                    seq += 1;
                    queue.push(Reverse(QueueEntry {
                        distance: candidate,
                        seq,
                        station: neighbor.clone(),
                    }));
                }
            }
        }

        if !previous.contains_key(to) {
            return Err(no_route());
        }

        let stations = reconstruct(&previous, from, to);

        let segment_distances = stations
            .windows(2)
            .map(|pair| network.direct_distance(&pair[0], &pair[1]))
            .collect::<Option<Vec<Distance>>>()
            .ok_or_else(no_route)?;
        let total_distance = segment_distances.iter().copied().sum();

        Ok(Path::new(stations, total_distance, segment_distances)?)
    }
}

/// Walk `previous` pointers back from `to`, then reverse into travel order.
fn reconstruct(
    previous: &HashMap<StationId, StationId>,
    from: &StationId,
    to: &StationId,
) -> Vec<StationId> {
    let mut stations = vec![to.clone()];
    let mut current = to;

    while current != from {
        match previous.get(current) {
            Some(prev) => {
                stations.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }

    stations.reverse();
    stations
}
