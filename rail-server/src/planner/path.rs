//! Path type.

use crate::domain::{Distance, StationId};

/// Error returned when a path is built from fewer than two stations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a path must contain at least 2 stations (start and end), got {station_count}")]
pub struct InvalidPath {
    station_count: usize,
}

/// A finished route: the stations traversed in order, the total distance,
/// and the length of each hop.
///
/// A path always has a distinct start and end, so it holds at least two
/// stations. `segment_distances[i]` is the length of the hop from
/// `stations[i]` to `stations[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    stations: Vec<StationId>,
    total_distance: Distance,
    segment_distances: Vec<Distance>,
}

impl Path {
    /// Create a path.
    ///
    /// `segment_distances` may be left empty when per-hop lengths are not
    /// known.
    pub fn new(
        stations: Vec<StationId>,
        total_distance: Distance,
        segment_distances: Vec<Distance>,
    ) -> Result<Self, InvalidPath> {
        if stations.len() < 2 {
            return Err(InvalidPath {
                station_count: stations.len(),
            });
        }

        Ok(Self {
            stations,
            total_distance,
            segment_distances,
        })
    }

    /// The stations traversed, start first.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// The station ids as plain strings.
    pub fn station_ids(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.as_str().to_string()).collect()
    }

    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    pub fn start(&self) -> &StationId {
        &self.stations[0]
    }

    pub fn end(&self) -> &StationId {
        &self.stations[self.stations.len() - 1]
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of hops, one fewer than the number of stations.
    pub fn segment_count(&self) -> usize {
        self.stations.len() - 1
    }

    pub fn segment_distances(&self) -> &[Distance] {
        &self.segment_distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn km(v: f64) -> Distance {
        Distance::from_kilometers(v).unwrap()
    }

    #[test]
    fn rejects_fewer_than_two_stations() {
        assert!(Path::new(vec![], Distance::zero(), vec![]).is_err());

        let err = Path::new(vec![id("A")], Distance::zero(), vec![]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a path must contain at least 2 stations (start and end), got 1"
        );
    }

    #[test]
    fn accessors() {
        let path = Path::new(
            vec![id("MX"), id("CGE"), id("VUAR")],
            km(1.0),
            vec![km(0.65), km(0.35)],
        )
        .unwrap();

        assert_eq!(path.start(), &id("MX"));
        assert_eq!(path.end(), &id("VUAR"));
        assert_eq!(path.station_count(), 3);
        assert_eq!(path.segment_count(), 2);
        assert_eq!(path.total_distance(), km(1.0));
        assert_eq!(path.segment_distances(), &[km(0.65), km(0.35)]);
        assert_eq!(path.station_ids(), vec!["MX", "CGE", "VUAR"]);
    }

    #[test]
    fn segment_distances_optional() {
        let path = Path::new(vec![id("A"), id("B")], km(2.0), vec![]).unwrap();
        assert!(path.segment_distances().is_empty());
        assert_eq!(path.segment_count(), 1);
    }
}
