//! Application state for the web layer.

use std::sync::Arc;

use crate::analytics::{InMemoryRouteRecordStore, RouteRecordStore};
use crate::auth::{InMemoryUserStore, UserStore};
use crate::config::ServerConfig;
use crate::loader::{CachedNetworkLoader, JsonNetworkLoader, NetworkCacheConfig};
use crate::planner::DijkstraPathFinder;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached rail network
    pub network: Arc<CachedNetworkLoader>,

    /// Shortest-path finder
    pub finder: Arc<DijkstraPathFinder>,

    /// Trip records for statistics
    pub records: Arc<dyn RouteRecordStore>,

    /// Registered users
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: CachedNetworkLoader,
        records: Arc<dyn RouteRecordStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            network: Arc::new(network),
            finder: Arc::new(DijkstraPathFinder::new()),
            records,
            users,
        }
    }

    /// Build the state a server runs with: JSON data files and in-memory stores.
    pub fn from_config(config: &ServerConfig) -> Self {
        let loader = JsonNetworkLoader::new(config.stations_path.clone(), config.distances_path.clone());
        let cache_config = NetworkCacheConfig {
            ttl: config.network_ttl,
        };

        Self::new(
            CachedNetworkLoader::new(loader, &cache_config),
            Arc::new(InMemoryRouteRecordStore::new()),
            Arc::new(InMemoryUserStore::new()),
        )
    }
}
