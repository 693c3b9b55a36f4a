//! Error types for the `starter` CLI.

use std::path::PathBuf;

use miette::Report;
use starter_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid settings: {0}")]
    Settings(#[from] figment::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Actionable suggestion shown under the error, when there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(ConfigError::NotFound(_)) => {
                Some("Run inside a project directory or pass --cwd / --manifest")
            }
            Self::Config(ConfigError::Parse { .. }) => Some("Check package.json syntax"),
            Self::Config(ConfigError::MissingWebpackSection) => {
                Some("Add a \"webpack\" field with at least an \"entry\" map to package.json")
            }
            Self::Config(ConfigError::InvalidSection { .. }) => {
                Some("Check the field types of the named section in package.json")
            }
            Self::Settings(_) => Some("Check STARTER_* environment variables"),
            _ => None,
        }
    }
}

/// Convert CliError to a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!("{}\n\nHint: {}", err, hint),
        None => miette::miette!("{}", err),
    }
}
