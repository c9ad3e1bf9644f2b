use crate::presentation::config::{Environment, LoggingSettings};

const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub directives: String,
}

impl TracingConfig {
    /// `LOG_FORMAT` takes precedence over `logging.json_format` when set.
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let log_format = std::env::var(LOG_FORMAT_VAR).ok();
        Self::with_log_format(settings, environment, log_format.as_deref())
    }

    pub fn with_log_format(
        settings: &LoggingSettings,
        environment: Environment,
        log_format: Option<&str>,
    ) -> Self {
        let json_format = match log_format {
            Some(format) => format.trim().eq_ignore_ascii_case("json"),
            None => settings.json_format,
        };

        Self {
            environment: environment.to_string(),
            json_format,
            directives: settings.level.clone(),
        }
    }
}
