use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Unprint operations
#[derive(Error, Debug)]
pub enum UnprintError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// History log errors
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History log at {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize history: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration in {path:?}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Result type alias for Unprint operations
pub type UnprintResult<T> = Result<T, UnprintError>;
