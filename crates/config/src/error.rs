//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// An environment variable holds a value that cannot be used.
    #[error("invalid value for {name}: {reason}")]
    InvalidEnv {
        /// The variable name.
        name: &'static str,
        /// Why the value was refused.
        reason: String,
    },

    /// A fallback dimension is zero.
    #[error("invalid fallback geometry: {field} must be greater than zero")]
    InvalidFallback {
        /// The offending field.
        field: &'static str,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
