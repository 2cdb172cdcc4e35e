//! Shortest-path routing over the rail network.
//!
//! This module answers "what is the shortest way from station A to
//! station B?" using Dijkstra's algorithm, and packages the answer as an
//! immutable [`Path`].

mod dijkstra;
mod path;
mod route;


pub use dijkstra::{DijkstraPathFinder, PathFinder};
pub use path::{InvalidPath, Path};
pub use route::{RoutePlan, RoutePlanner};
