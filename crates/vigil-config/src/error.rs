//! Configuration error types.

use thiserror::Error;

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path of the offending file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A config file (or the embedded defaults) failed to parse as TOML.
    #[error("failed to parse config {path}: {source}")]
    ParseError {
        /// Path of the offending file.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The user's home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
