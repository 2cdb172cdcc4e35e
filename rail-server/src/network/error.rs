//! Routing error types.

use crate::domain::StationId;
use crate::planner::InvalidPath;

/// Errors raised by network queries and path finding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    /// The station is not part of the network
    #[error("station with id \"{0}\" not found in the network")]
    StationNotFound(StationId),

    /// The destination cannot be reached from the origin
    #[error("no route found between station \"{from}\" and station \"{to}\"")]
    NoRouteFound { from: StationId, to: StationId },

    /// A path was built with too few stations
    #[error(transparent)]
    InvalidPath(#[from] InvalidPath),
}
