//! Error types for the I/O and configuration boundary.
//!
//! The analysis engines themselves never fail: malformed input is reported
//! inside their result types. These errors cover everything around them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrdplanError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrdplanError>;
