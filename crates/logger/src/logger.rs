//! The constructed logger handle

use std::fmt;

use tracing::Dispatch;
use tracing::dispatcher::{self, DefaultGuard};

use crate::config::{Format, Level, Output};
use crate::core::{LogError, LogResult};

/// A configured logger
///
/// Wraps a [`Dispatch`]; events emitted with the `tracing` macros go to it
/// while it is active, either for a scope ([`Logger::in_scope`],
/// [`Logger::set_default`]) or for the whole process ([`Logger::init`]).
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    format: Format,
    level: Level,
    output: Option<Output>,
    source: bool,
}

impl Logger {
    pub(crate) fn new(
        dispatch: Dispatch,
        format: Format,
        level: Level,
        output: Option<Output>,
        source: bool,
    ) -> Self {
        Self {
            dispatch,
            format,
            level,
            output,
            source,
        }
    }

    /// Output format
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Minimum level that is emitted
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Resolved output destination, `None` when an explicit writer was given
    #[must_use]
    pub fn output(&self) -> Option<&Output> {
        self.output.as_ref()
    }

    /// Whether records carry their call site
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source
    }

    /// Whether records at `level` are emitted
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Underlying dispatcher
    #[must_use]
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Run `f` with this logger as the current thread's default
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this logger the current thread's default until the guard drops
    #[must_use = "the logger stops being the default when the guard is dropped"]
    pub fn set_default(&self) -> DefaultGuard {
        dispatcher::set_default(&self.dispatch)
    }

    /// Install as the global default for the rest of the process
    ///
    /// With the `log-compat` feature, records from the `log` crate are
    /// forwarded as well.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Init`] if a global default is already set.
    pub fn init(self) -> LogResult<()> {
        dispatcher::set_global_default(self.dispatch)
            .map_err(|e| LogError::Init(e.to_string()))?;

        #[cfg(feature = "log-compat")]
        {
            let _ = tracing_log::LogTracer::init();
        }

        Ok(())
    }
}

impl From<Logger> for Dispatch {
    fn from(logger: Logger) -> Self {
        logger.dispatch
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("format", &self.format)
            .field("level", &self.level)
            .field("output", &self.output)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
