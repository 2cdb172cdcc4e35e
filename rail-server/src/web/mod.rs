//! Web layer for the rail routing server.
//!
//! Provides the JSON API for stations, routes, statistics and users.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
