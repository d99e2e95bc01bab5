//! Application configuration
//!
//! Layered from built-in defaults, an optional `tempmail.toml` and
//! `TEMPMAIL_*` environment variables, in that order of precedence.
//! Sub-modules:
//! - `mailbox`: polling, notifications, welcome filter, clipboard

mod mailbox;

use std::path::Path;

use application::ControllerConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use mailbox::{ClipboardConfig, NotificationConfig, PollingConfig, WelcomeFilterConfig};

use crate::telemetry::TelemetryConfig;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "tempmail";

/// Prefix of environment overrides, e.g. `TEMPMAIL_POLLING__INTERVAL_SECS`
pub const ENV_PREFIX: &str = "TEMPMAIL";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Background refresh timer
    #[serde(default)]
    pub polling: PollingConfig,

    /// Status line
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Welcome message filter
    #[serde(default)]
    pub filter: WelcomeFilterConfig,

    /// Clipboard integration
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file plus environment overrides
    ///
    /// Unlike [`Self::load`] the file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Reject values the controller cannot run with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.polling.interval_secs == 0 {
            return Err(config::ConfigError::Message(
                "polling.interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.notifications.dismiss_after_ms == 0 {
            return Err(config::ConfigError::Message(
                "notifications.dismiss_after_ms must be greater than zero".to_string(),
            ));
        }
        if self.filter.sender.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "filter.sender must not be empty".to_string(),
            ));
        }
        if self.clipboard.enabled && self.clipboard.command.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "clipboard.command must be set when the clipboard is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Controller tunables derived from this configuration
    #[must_use]
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            poll_interval: self.polling.interval(),
            notification_ttl: self.notifications.dismiss_after(),
            welcome_filter: (&self.filter).into(),
        }
    }
}
