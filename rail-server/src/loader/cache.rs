//! Time-bounded caching of the loaded network.
//!
//! Loading parses both data files, so the server keeps the result for a
//! configurable time. A reload builds a brand new [`Network`] and replaces
//! the cached `Arc`; requests already holding the old one keep using it.
//! Loads read files and parse JSON, so they run on tokio's blocking pool.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::info;

use crate::network::Network;

use super::NetworkLoader;
use super::error::LoaderError;

/// Configuration for the network cache.
#[derive(Debug, Clone)]
pub struct NetworkCacheConfig {
    /// How long a loaded network is reused. Zero reloads on every request.
    pub ttl: Duration,
}

impl Default for NetworkCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
        }
    }
}

/// A network loader that caches its result.
pub struct CachedNetworkLoader {
    loader: Arc<dyn NetworkLoader>,
    cache: Option<MokaCache<(), Arc<Network>>>,
}

impl CachedNetworkLoader {
    /// Wrap `loader` with the given cache configuration.
    pub fn new(loader: impl NetworkLoader + 'static, config: &NetworkCacheConfig) -> Self {
        let cache = (!config.ttl.is_zero()).then(|| {
            MokaCache::builder()
                .time_to_live(config.ttl)
                .max_capacity(1)
                .build()
        });

        Self {
            loader: Arc::new(loader),
            cache,
        }
    }

    /// Returns the current network, loading it if the cache is empty or
    /// expired.
    pub async fn network(&self) -> Result<Arc<Network>, LoaderError> {
        let Some(cache) = &self.cache else {
            return self.load_fresh().await;
        };

        cache
            .try_get_with((), self.load_fresh())
            .await
            .map_err(|e| (*e).clone())
    }

    /// Drop the cached network so the next call reloads it.
    pub async fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate(&()).await;
        }
    }

    async fn load_fresh(&self) -> Result<Arc<Network>, LoaderError> {
        let loader = Arc::clone(&self.loader);
        let network = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| LoaderError::Interrupted {
                message: e.to_string(),
            })??;
        info!(
            stations = network.station_count(),
            segments = network.segment_count(),
            "Loaded rail network"
        );
        Ok(Arc::new(network))
    }
}
