//! Error types for the demo configuration.
//!
//! The closures themselves never fail: the failures of a caller-supplied
//! transform are returned unmodified by [crate::mapstr::try_mapstr].

use thiserror::Error;

/// Result type alias using [Error]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file couldn't be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON, or has unexpected fields
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
