//! Option values accepted by [`build`](crate::build)
//!
//! Each [`LogOption`] applies one change to the builder. Options are applied
//! in order: a later value for the same setting replaces an earlier one,
//! while replacers accumulate.

use std::fmt;
use std::sync::Arc;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use super::LoggerBuilder;
use crate::replace::{Attr, ReplaceFn};

/// A single deferred configuration change
#[non_exhaustive]
pub enum LogOption {
    /// Set the format name
    Format(String),
    /// Set the level name
    Level(String),
    /// Set the output destination
    Output(String),
    /// Set an explicit sink; takes precedence over [`LogOption::Output`]
    Writer(BoxMakeWriter),
    /// Enable or disable call site annotation
    Source(bool),
    /// Append a replacer to the pipeline
    Replacer(Arc<ReplaceFn>),
}

impl LogOption {
    pub(super) fn apply(self, builder: &mut LoggerBuilder) {
        match self {
            LogOption::Format(format) => builder.config.format = format,
            LogOption::Level(level) => builder.config.level = level,
            LogOption::Output(output) => builder.config.output = output,
            LogOption::Writer(writer) => builder.writer = Some(writer),
            LogOption::Source(source) => builder.config.source = source,
            LogOption::Replacer(f) => builder.replacer.push_shared(f),
        }
    }
}

impl fmt::Debug for LogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogOption::Format(v) => f.debug_tuple("Format").field(v).finish(),
            LogOption::Level(v) => f.debug_tuple("Level").field(v).finish(),
            LogOption::Output(v) => f.debug_tuple("Output").field(v).finish(),
            LogOption::Writer(_) => f.write_str("Writer(..)"),
            LogOption::Source(v) => f.debug_tuple("Source").field(v).finish(),
            LogOption::Replacer(_) => f.write_str("Replacer(..)"),
        }
    }
}

/// Set the log format. Valid values are `text` and `json`.
pub fn with_format(format: impl Into<String>) -> LogOption {
    LogOption::Format(format.into())
}

/// Set the log level. Valid values are `debug`, `info`, `warn` and `error`.
pub fn with_level(level: impl Into<String>) -> LogOption {
    LogOption::Level(level.into())
}

/// Set the output: `-`, `stdout`, `stderr` or a file path.
///
/// Ignored when [`with_writer`] is also given.
pub fn with_output(output: impl Into<String>) -> LogOption {
    LogOption::Output(output.into())
}

/// Write records to `writer` instead of the configured output.
pub fn with_writer<W>(writer: W) -> LogOption
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    LogOption::Writer(BoxMakeWriter::new(writer))
}

/// Annotate each record with the file and line it was emitted from.
pub fn with_source(source: bool) -> LogOption {
    LogOption::Source(source)
}

/// Append an attribute replacer.
pub fn with_replacer<F>(replacer: F) -> LogOption
where
    F: Fn(&[&str], Attr) -> Attr + Send + Sync + 'static,
{
    LogOption::Replacer(Arc::new(replacer))
}
