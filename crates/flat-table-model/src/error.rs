//! Error types for grid configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a [`GridConfig`](crate::GridConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read grid configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("failed to parse grid configuration {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to render the configuration as TOML.
    #[error("failed to serialize grid configuration: {message}")]
    Serialize { message: String },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
