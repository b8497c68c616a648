//! Application error types.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Twitch error: {0}")]
    Twitch(#[from] twitch_client::TwitchError),

    #[error("Command loading error: {0}")]
    Load(#[from] LoadError),
}

/// Errors loading a single command definition file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not have a valid suffix (i.e. `.command.json` or `.interval.json`)", path.display())]
    UnknownSuffix { path: PathBuf },

    #[error("Rejected {}: {source}", path.display())]
    Registry {
        path: PathBuf,
        #[source]
        source: command_engine::RegistryError,
    },
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
