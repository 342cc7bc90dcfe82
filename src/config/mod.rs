//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values like `RIOT_API_KEY`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

mod logging;
mod monitor;
mod riot;
mod telegram;

pub use logging::LoggingConfig;
pub use monitor::MonitorConfig;
pub use riot::RiotConfig;
pub use telegram::TelegramAppConfig;

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub riot: RiotConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub telegram: TelegramAppConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults so the bot can run from
    /// environment variables alone.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str::<Self>(&content).map_err(ConfigError::Parse)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        // The API key comes from the environment only, never the file.
        config.riot.api_key = std::env::var("RIOT_API_KEY").ok();

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.monitor.streak_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.streak_threshold",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.monitor.history_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.history_depth",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.monitor.streak_interval_secs == 0 || self.monitor.live_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.*_interval_secs",
                reason: "intervals must be non-zero".into(),
            }
            .into());
        }
        if self.riot.platform.is_empty() {
            return Err(ConfigError::MissingField {
                field: "riot.platform",
            }
            .into());
        }
        if self.riot.routing.is_empty() {
            return Err(ConfigError::MissingField {
                field: "riot.routing",
            }
            .into());
        }
        Ok(())
    }
}
