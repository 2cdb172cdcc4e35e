//! In-memory model of the rail network.
//!
//! Stations are nodes, track segments are undirected weighted edges, and
//! both are keyed by [`StationId`](crate::domain::StationId).

mod error;
mod graph;
mod segment;
mod station;

pub use error::RoutingError;
pub use graph::Network;
pub use segment::Segment;
pub use station::{Neighbor, Station};
