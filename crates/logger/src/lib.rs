//! # Nebula Logger
//!
//! Turns a list of options into a ready-to-use structured logger.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_logger::prelude::*;
//!
//! fn main() -> Result<(), LogError> {
//!     let logger = nebula_logger::build([
//!         with_format("json"),
//!         with_level("debug"),
//!         with_output("stderr"),
//!     ])?;
//!
//!     logger.in_scope(|| info!(port = 8080, "server starting"));
//!     Ok(())
//! }
//! ```
//!
//! ## Options
//!
//! | option | values | default |
//! |---|---|---|
//! | format | `text`, `json` | `text` |
//! | level | `debug`, `info`, `warn`, `error` | `info` |
//! | output | `-`, `stdout`, `stderr`, a file path | `stdout` |
//! | source | `bool` | `false` |
//!
//! [`with_writer`] sends records to any `MakeWriter` and takes precedence
//! over the output setting. [`with_replacer`] rewrites or drops attributes
//! before they are encoded; replacers run in the order they were added.
//! Fields of the enclosing spans are written with every record, before the
//! event's own fields.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;
mod format;
mod layer;
mod logger;
mod replace;
mod writer;

// Public API
pub use builder::{
    LogOption, LoggerBuilder, with_format, with_level, with_output, with_replacer, with_source,
    with_writer,
};
pub use config::{Config, Format, Level, Output};
pub use crate::core::{LogError, LogResult};
pub use logger::Logger;
pub use replace::{Attr, LEVEL_KEY, MESSAGE_KEY, ReplaceFn, Replacer, SOURCE_KEY, TIME_KEY};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Attr, LogError, LogResult, Logger, LoggerBuilder, build, build_or_panic, debug, error,
        info, warn, with_format, with_level, with_output, with_replacer, with_source, with_writer,
    };

    pub use tracing::{Span, field};
}

// Re-export tracing macros
pub use tracing::{debug, error, info, info_span, warn};

/// Build a logger from options applied in order
///
/// # Errors
///
/// Returns [`LogError::InvalidLogLevel`] or [`LogError::InvalidLogFormat`]
/// for unknown names, and [`LogError::Io`] if the output file cannot be
/// created.
pub fn build(options: impl IntoIterator<Item = LogOption>) -> LogResult<Logger> {
    LoggerBuilder::new().options(options).build()
}

/// Build a logger from options, panicking on an invalid configuration
pub fn build_or_panic(options: impl IntoIterator<Item = LogOption>) -> Logger {
    LoggerBuilder::new().options(options).build_or_panic()
}

/// Build a logger from `NEBULA_LOG_*` environment variables
///
/// # Errors
///
/// Same as [`build`].
pub fn from_env() -> LogResult<Logger> {
    LoggerBuilder::from_config(Config::from_env()).build()
}
