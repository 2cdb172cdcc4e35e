//! Building the network from its data sources.
//!
//! The [`NetworkLoader`] trait abstracts where the network comes from;
//! [`JsonNetworkLoader`] reads the two static JSON files and
//! [`CachedNetworkLoader`] keeps the result around between requests.

mod cache;
mod error;
mod json;

pub use cache::{CachedNetworkLoader, NetworkCacheConfig};
pub use error::LoaderError;
pub use json::{JsonNetworkLoader, LineRecord, SegmentRecord, StationRecord};

use crate::network::Network;

/// A source of fully populated networks.
pub trait NetworkLoader: Send + Sync {
    /// Build a new network from scratch.
    fn load(&self) -> Result<Network, LoaderError>;
}
