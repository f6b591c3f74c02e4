//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use hilo_core::{AnswerInputError, SessionError, SettingsError};

/// Errors emitted by the Normal and Timed mode drivers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DriverError {
    #[error(transparent)]
    Input(#[from] AnswerInputError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("timed mode is no longer running")]
    Stopped,
}

/// Errors emitted while loading trainer settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
