//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIONS_PATH: &str = "data/stations.json";
const DEFAULT_DISTANCES_PATH: &str = "data/distances.json";
const DEFAULT_NETWORK_TTL_SECS: u64 = 300;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {variable}: {reason}")]
pub struct ConfigError {
    variable: &'static str,
    value: String,
    reason: &'static str,
}

impl ConfigError {
    /// The environment variable that failed to parse.
    pub fn variable(&self) -> &'static str {
        self.variable
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Stations JSON file
    pub stations_path: PathBuf,
    /// Line distances JSON file
    pub distances_path: PathBuf,
    /// How long a loaded network is reused; zero reloads per request
    pub network_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            stations_path: PathBuf::from(DEFAULT_STATIONS_PATH),
            distances_path: PathBuf::from(DEFAULT_DISTANCES_PATH),
            network_ttl: Duration::from_secs(DEFAULT_NETWORK_TTL_SECS),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `RAIL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("RAIL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError {
            variable: "RAIL_BIND_ADDR",
            value: bind_addr.clone(),
            reason: "expected host:port",
        })?;

        let network_ttl = match lookup("RAIL_NETWORK_TTL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError {
                variable: "RAIL_NETWORK_TTL_SECS",
                value: raw.clone(),
                reason: "expected a whole number of seconds",
            })?,
            None => DEFAULT_NETWORK_TTL_SECS,
        };

        let defaults = Self::default();
        Ok(Self {
            bind_addr,
            stations_path: lookup("RAIL_STATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.stations_path),
            distances_path: lookup("RAIL_DISTANCES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.distances_path),
            network_ttl: Duration::from_secs(network_ttl),
        })
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set both data file paths.
    pub fn with_data_paths(
        mut self,
        stations: impl Into<PathBuf>,
        distances: impl Into<PathBuf>,
    ) -> Self {
        self.stations_path = stations.into();
        self.distances_path = distances.into();
        self
    }

    pub fn with_network_ttl(mut self, ttl: Duration) -> Self {
        self.network_ttl = ttl;
        self
    }
}
