//! Station and neighbour types.

use crate::domain::{Distance, StationId};

/// A station on the network: an id plus a human-readable name.
///
/// Identity is the id alone; two stations with the same id but different
/// names compare equal.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Creates a new station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the station id.
    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

/// A station adjacent to another, with the length of the connecting track.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub station_id: StationId,
    pub distance: Distance,
}

impl Neighbor {
    pub fn new(station_id: StationId, distance: Distance) -> Self {
        Self {
            station_id,
            distance,
        }
    }
}
