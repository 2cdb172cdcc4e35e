//! Route planning query.
//!
//! Wraps a [`PathFinder`] with the checks and lookups a request handler
//! needs: both endpoints must exist, and the result carries station names
//! alongside the path.

use tracing::debug;

use crate::domain::StationId;
use crate::network::{Network, RoutingError};

use super::dijkstra::PathFinder;
use super::path::Path;

/// A planned route with display names for each station on the path.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub path: Path,
    pub station_names: Vec<String>,
}

/// Plans routes over a loaded network.
pub struct RoutePlanner<'a, F: PathFinder> {
    network: &'a Network,
    finder: &'a F,
}

impl<'a, F: PathFinder> RoutePlanner<'a, F> {
    /// Create a planner over `network` using `finder`.
    pub fn new(network: &'a Network, finder: &'a F) -> Self {
        Self { network, finder }
    }

    /// Plan a route between two stations.
    ///
    /// Fails with [`RoutingError::StationNotFound`] if either endpoint is
    /// missing (origin checked first), otherwise with whatever the finder
    /// reports.
    pub fn plan(
        &self,
        origin: &StationId,
        destination: &StationId,
    ) -> Result<RoutePlan, RoutingError> {
        self.network.station(origin)?;
        self.network.station(destination)?;

        let path = self.finder.find_path(self.network, origin, destination)?;

        let station_names = path
            .stations()
            .iter()
            .map(|id| self.network.station(id).map(|s| s.name().to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            origin = %origin,
            destination = %destination,
            stations = path.station_count(),
            distance_km = path.total_distance().kilometers(),
            "Planned route"
        );

        Ok(RoutePlan {
            path,
            station_names,
        })
    }
}
