//! Error types for manifest loading and configuration derivation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("manifest has no `webpack` field")]
    MissingWebpackSection,

    #[error("invalid `{section}` section: {message}")]
    InvalidSection {
        section: &'static str,
        message: String,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid_section(section: &'static str, err: impl std::fmt::Display) -> Self {
        Self::InvalidSection {
            section,
            message: err.to_string(),
        }
    }
}
