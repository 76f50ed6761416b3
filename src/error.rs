//! Error types for the application shell.
//!
//! The theme/navigation state machine itself cannot fail; these errors cover
//! the terminal, configuration loading and log setup around it. The binary
//! reports them through `color_eyre`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal IO error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Invalid value {value:?} for {key}: {message}")]
    Config {
        key: String,
        value: String,
        message: String,
    },

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid command line: {0}")]
    Usage(String),
}

impl AppError {
    pub fn config(key: impl Into<String>, value: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Config {
            key: key.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
