//! Configuration presets and environment loading

use super::{Config, Format, Level};

impl Config {
    /// Create configuration from environment variables
    ///
    /// Reads `NEBULA_LOG_FORMAT`, `NEBULA_LOG_LEVEL`, `NEBULA_LOG_OUTPUT` and
    /// `NEBULA_LOG_SOURCE`. `RUST_LOG` is used as the level only when it is a
    /// bare level name; filter directives such as `info,hyper=warn` are
    /// ignored. Values are not validated until the logger is built.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(format) = var("NEBULA_LOG_FORMAT") {
            config.format = format;
        }

        if let Some(level) = var("NEBULA_LOG_LEVEL") {
            config.level = level;
        } else if let Some(level) = var("RUST_LOG")
            && level.parse::<Level>().is_ok()
        {
            config.level = level;
        }

        if let Some(output) = var("NEBULA_LOG_OUTPUT") {
            config.output = output;
        }

        if let Some(v) = var("NEBULA_LOG_SOURCE") {
            config.source = v != "0" && v != "false";
        }

        config
    }

    /// Development configuration (text, debug level, stderr, call sites)
    #[must_use]
    pub fn development() -> Self {
        Self {
            format: Format::Text.to_string(),
            level: Level::Debug.to_string(),
            output: "stderr".to_string(),
            source: true,
        }
    }

    /// Production configuration (JSON, info level, stdout)
    #[must_use]
    pub fn production() -> Self {
        Self {
            format: Format::Json.to_string(),
            level: Level::Info.to_string(),
            ..Self::default()
        }
    }
}
