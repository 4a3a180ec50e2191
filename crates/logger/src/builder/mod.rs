//! Logger builder implementation
//!
//! This module is organized into:
//! - `options`: [`LogOption`] values and their `with_*` constructors

mod options;

// Re-export public types
pub use options::{
    LogOption, with_format, with_level, with_output, with_replacer, with_source, with_writer,
};

// Standard library
use std::fmt;

// External dependencies
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{Registry, layer::SubscriberExt};

// Internal crates
use crate::config::{Config, Format, Level, Output};
use crate::core::LogResult;
use crate::format::RecordFormat;
use crate::layer::SpanFieldsLayer;
use crate::logger::Logger;
use crate::replace::{Attr, Replacer};
use crate::writer;

/// Logger builder
///
/// Setters can be called in any order and any number of times; the last
/// value wins, except for replacers which accumulate in call order.
pub struct LoggerBuilder {
    config: Config,
    writer: Option<BoxMakeWriter>,
    replacer: Replacer,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("writer", &self.writer.is_some())
            .field("replacer", &self.replacer)
            .finish()
    }
}

impl LoggerBuilder {
    /// Create builder with default settings (text, info, stdout)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            writer: None,
            replacer: Replacer::new(),
        }
    }

    /// Apply a single option
    pub fn option(mut self, option: LogOption) -> Self {
        option.apply(&mut self);
        self
    }

    /// Apply options in order
    pub fn options(mut self, options: impl IntoIterator<Item = LogOption>) -> Self {
        for option in options {
            option.apply(&mut self);
        }
        self
    }

    /// Set the format name (`text` or `json`)
    pub fn with_format(self, format: impl Into<String>) -> Self {
        self.option(with_format(format))
    }

    /// Set the level name (`debug`, `info`, `warn` or `error`)
    pub fn with_level(self, level: impl Into<String>) -> Self {
        self.option(with_level(level))
    }

    /// Set the output (`-`, `stdout`, `stderr` or a file path)
    pub fn with_output(self, output: impl Into<String>) -> Self {
        self.option(with_output(output))
    }

    /// Write to an explicit sink, overriding the output setting
    pub fn with_writer<W>(self, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.option(with_writer(writer))
    }

    /// Enable or disable call site annotation
    pub fn with_source(self, source: bool) -> Self {
        self.option(with_source(source))
    }

    /// Append an attribute replacer
    pub fn with_replacer<F>(mut self, replacer: F) -> Self
    where
        F: Fn(&[&str], Attr) -> Attr + Send + Sync + 'static,
    {
        self.replacer.push(replacer);
        self
    }

    /// Current configuration, before validation
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the configuration and construct the logger
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the level is not `debug`, `info`, `warn` or `error`
    /// - the format is not `text` or `json`
    /// - the output file cannot be created
    pub fn build(self) -> LogResult<Logger> {
        let Self {
            config,
            writer,
            replacer,
        } = self;

        let level: Level = config.level.parse()?;
        let format: Format = config.format.parse()?;

        // An explicit sink wins; the output setting is then never opened.
        let (writer, output) = match writer {
            Some(writer) => (writer, None),
            None => {
                let output = Output::parse(&config.output);
                (writer::make_writer(&output)?, Some(output))
            }
        };

        tracing::debug!(
            target: "nebula_logger",
            %format,
            %level,
            output = ?output,
            source = config.source,
            replacers = replacer.len(),
            "building logger"
        );

        let fmt_layer = tracing_subscriber::fmt::layer()
            .event_format(RecordFormat::new(format, config.source, replacer))
            .with_writer(writer);
        let subscriber = Registry::default()
            .with(level.as_filter())
            .with(SpanFieldsLayer)
            .with(fmt_layer);

        Ok(Logger::new(
            Dispatch::new(subscriber),
            format,
            level,
            output,
            config.source,
        ))
    }

    /// Like [`build`](Self::build), but panics on an invalid configuration
    ///
    /// For call sites where a bad logging setup is a startup bug.
    pub fn build_or_panic(self) -> Logger {
        match self.build() {
            Ok(logger) => logger,
            Err(e) => panic!("failed to build logger: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogError;

    #[test]
    fn test_defaults() {
        let logger = LoggerBuilder::new().build().unwrap();
        assert_eq!(logger.format(), Format::Text);
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.output(), Some(&Output::Stdout));
        assert!(!logger.has_source());
    }

    #[test]
    fn test_last_write_wins() {
        let builder = LoggerBuilder::new()
            .with_level("debug")
            .with_level("warn")
            .with_format("json")
            .with_format("text")
            .with_output("stdout")
            .with_output("stderr");
        assert_eq!(builder.config().level, "warn");

        let logger = builder.build().unwrap();
        assert_eq!(logger.level(), Level::Warn);
        assert_eq!(logger.format(), Format::Text);
        assert_eq!(logger.output(), Some(&Output::Stderr));
    }

    #[test]
    fn test_options_and_setters_agree() {
        let from_options = LoggerBuilder::new()
            .options([with_level("error"), with_format("json"), with_source(true)])
            .build()
            .unwrap();
        let from_setters = LoggerBuilder::new()
            .with_level("error")
            .with_format("json")
            .with_source(true)
            .build()
            .unwrap();

        assert_eq!(from_options.level(), from_setters.level());
        assert_eq!(from_options.format(), from_setters.format());
        assert_eq!(from_options.has_source(), from_setters.has_source());
    }

    #[test]
    fn test_replacers_accumulate() {
        let builder = LoggerBuilder::new()
            .with_replacer(|_, a| a)
            .option(with_replacer(|_, a| a))
            .with_replacer(|_, a| a);
        assert_eq!(builder.replacer.len(), 3);
    }

    #[test]
    fn test_level_checked_before_format() {
        let err = LoggerBuilder::new()
            .with_level("loud")
            .with_format("xml")
            .build()
            .unwrap_err();
        assert!(matches!(err, LogError::InvalidLogLevel(_)));
    }

    #[test]
    fn test_invalid_config_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.log");

        let err = LoggerBuilder::new()
            .with_output(path.to_string_lossy())
            .with_format("yaml")
            .build()
            .unwrap_err();
        assert!(matches!(err, LogError::InvalidLogFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_from_config() {
        let logger = LoggerBuilder::from_config(Config::production())
            .with_level("warn")
            .build()
            .unwrap();
        assert_eq!(logger.format(), Format::Json);
        assert_eq!(logger.level(), Level::Warn);
    }

    #[test]
    #[should_panic(expected = "invalid log format")]
    fn test_build_or_panic() {
        let _ = LoggerBuilder::new().with_format("xml").build_or_panic();
    }
}
