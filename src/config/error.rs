//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    ParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A count that must be positive was zero.
    #[error("{name} must be at least 1")]
    ZeroValue { name: &'static str },

    /// Search base URL could not be parsed.
    #[error("invalid search base URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
