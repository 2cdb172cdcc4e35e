//! The rail network graph.

use std::collections::HashMap;

use crate::domain::{Distance, StationId};

use super::error::RoutingError;
use super::segment::Segment;
use super::station::{Neighbor, Station};

/// An undirected, weighted graph of stations and track segments.
///
/// Every segment is stored in both directions, so neighbour lookups are a
/// single map access from either end. The network is filled during a load
/// phase and is read-only afterwards; reloading means building a new
/// `Network` rather than mutating a shared one.
///
/// Segments may reference stations that were never added with
/// [`Network::add_station`]. Such ids get an adjacency entry but no
/// [`Station`], so [`Network::has_station`] reports them as absent and path
/// finding never routes through them.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    adjacency: HashMap<StationId, HashMap<StationId, Distance>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a station.
    ///
    /// Ensures the station has an adjacency entry, initially empty.
    pub fn add_station(&mut self, station: Station) {
        let id = station.id().clone();
        self.adjacency.entry(id.clone()).or_default();
        self.stations.insert(id, station);
    }

    /// Add a segment in both directions.
    ///
    /// A later segment between the same pair overwrites the earlier distance.
    pub fn add_segment(&mut self, segment: Segment) {
        let distance = segment.distance();
        self.adjacency
            .entry(segment.from().clone())
            .or_default()
            .insert(segment.to().clone(), distance);
        self.adjacency
            .entry(segment.to().clone())
            .or_default()
            .insert(segment.from().clone(), distance);
    }

    /// Returns true if a station with this id has been added.
    pub fn has_station(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Result<&Station, RoutingError> {
        self.stations
            .get(id)
            .ok_or_else(|| RoutingError::StationNotFound(id.clone()))
    }

    /// All stations, in no particular order.
    pub fn stations(&self) -> Vec<&Station> {
        self.stations.values().collect()
    }

    /// All station ids, in no particular order.
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.keys().cloned().collect()
    }

    /// Stations directly connected to `id`.
    ///
    /// Returns an empty list for an isolated station and
    /// [`RoutingError::StationNotFound`] for an unknown one.
    pub fn neighbors(&self, id: &StationId) -> Result<Vec<Neighbor>, RoutingError> {
        if !self.has_station(id) {
            return Err(RoutingError::StationNotFound(id.clone()));
        }

        Ok(self
            .adjacency
            .get(id)
            .map(|adjacent| {
                adjacent
                    .iter()
                    .map(|(to, distance)| Neighbor::new(to.clone(), *distance))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Distance of the segment joining `from` and `to`, if they are adjacent.
    pub fn direct_distance(&self, from: &StationId, to: &StationId) -> Option<Distance> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Borrowing view of the neighbours of `id` for the path finder.
    ///
    /// Unlike [`Network::neighbors`] this never fails; unknown ids have no
    /// neighbours.
    pub(crate) fn adjacent(
        &self,
        id: &StationId,
    ) -> impl Iterator<Item = (&StationId, Distance)> + '_ {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|adjacent| adjacent.iter().map(|(to, d)| (to, *d)))
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of segments, counting A-B and B-A as one.
    pub fn segment_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(HashMap::len).sum();
        entries / 2
    }
}
