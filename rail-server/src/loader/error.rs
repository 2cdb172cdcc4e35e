//! Network loader error types.

use std::path::PathBuf;

/// Errors that can occur while building a network from its data sources.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoaderError {
    /// A data file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A data file exists but could not be read
    #[error("unable to read file {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// A data file is not valid JSON or has the wrong shape
    #[error("invalid JSON in file {}: {message}", path.display())]
    Json { path: PathBuf, message: String },

    /// A record holds an invalid station id or distance
    #[error("invalid data in file {}: {message}", path.display())]
    InvalidData { path: PathBuf, message: String },

    /// The background load task failed before producing a network
    #[error("network load did not complete: {message}")]
    Interrupted { message: String },
}
