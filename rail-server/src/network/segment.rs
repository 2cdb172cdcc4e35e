//! Track segment type.

use crate::domain::{Distance, StationId};

/// An undirected stretch of track between two stations.
///
/// Direction carries no meaning: `A-B` equals `B-A` when the distances match.
#[derive(Debug, Clone)]
pub struct Segment {
    from: StationId,
    to: StationId,
    distance: Distance,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(from: StationId, to: StationId, distance: Distance) -> Self {
        Self { from, to, distance }
    }

    pub fn from(&self) -> &StationId {
        &self.from
    }

    pub fn to(&self) -> &StationId {
        &self.to
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns true if either end of the segment is `station`.
    ///
    /// Model API for library callers; the path finder reads the adjacency map instead.
    pub fn connects(&self, station: &StationId) -> bool {
        &self.from == station || &self.to == station
    }

    /// Returns the opposite end of the segment from `station`.
    ///
    /// Returns `None` if the segment does not touch `station`. Model API for
    /// library callers, like [`Segment::connects`].
    pub fn other_end(&self, station: &StationId) -> Option<&StationId> {
        if &self.from == station {
            Some(&self.to)
        } else if &self.to == station {
            Some(&self.from)
        } else {
            None
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        let same_direction = self.from == other.from && self.to == other.to;
        let reversed = self.from == other.to && self.to == other.from;
        (same_direction || reversed) && self.distance == other.distance
    }
}
