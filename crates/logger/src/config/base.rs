//! Core configuration types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::core::LogError;

/// Declarative logger configuration
///
/// Values are kept as the raw strings the user supplied and are validated by
/// [`LoggerBuilder::build`](crate::LoggerBuilder::build), so a config file
/// with a typo surfaces as [`LogError`] instead of a deserialization panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format name (`text` or `json`)
    pub format: String,

    /// Minimum level name (`debug`, `info`, `warn` or `error`)
    pub level: String,

    /// Output destination: `-`/`stdout`, `stderr` or a file path
    pub output: String,

    /// Annotate each record with its call site
    pub source: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::Text.to_string(),
            level: Level::Info.to_string(),
            output: "stdout".to_string(),
            source: false,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `key=value` pairs on one line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(LogError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Log level threshold
///
/// Ordered by severity, so `Level::Debug < Level::Error`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Debug level
    Debug,
    /// Info level
    #[default]
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl Level {
    /// Filter that lets through this level and everything more severe
    #[must_use]
    pub fn as_filter(self) -> LevelFilter {
        match self {
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warn => LevelFilter::WARN,
            Level::Error => LevelFilter::ERROR,
        }
    }

    /// Whether an event at `level` passes this threshold
    #[must_use]
    pub fn allows(self, level: &tracing::Level) -> bool {
        self.as_filter() >= *level
    }
}

impl FromStr for Level {
    type Err = LogError;

    /// Exact, case-sensitive match on the four level names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LogError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}
