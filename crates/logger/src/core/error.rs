//! Error handling for nebula-logger
//!
//! Construction fails in exactly three ways: an unknown format name, an
//! unknown level name, or an I/O error while opening a file output. The I/O
//! error is carried unchanged so callers can inspect its [`std::io::ErrorKind`].

use std::io;

/// Result alias for logger construction
pub type LogResult<T> = Result<T, LogError>;

/// Errors returned while building or installing a logger
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Format name is not one of `text` or `json`
    #[error("invalid log format: {0:?}")]
    InvalidLogFormat(String),

    /// Level name is not one of `debug`, `info`, `warn` or `error`
    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),

    /// Opening the output file failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A global default subscriber is already installed
    #[error("failed to install global logger: {0}")]
    Init(String),
}

impl LogError {
    /// Kind of the underlying I/O error, if this is an I/O failure
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Whether the error comes from a bad option value rather than the environment
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidLogFormat(_) | Self::InvalidLogLevel(_))
    }
}
