//! Mailbox client settings.

use std::time::Duration;

use domain::{
    WelcomeFilter,
    welcome_filter::{DEFAULT_WELCOME_SENDER, DEFAULT_WELCOME_SUBJECT},
};
use serde::{Deserialize, Serialize};

/// Background refresh timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Seconds between scheduled refreshes
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

const fn default_interval_secs() -> u64 {
    30
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl PollingConfig {
    /// Interval as a [`Duration`]
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Milliseconds a notification stays visible
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

const fn default_dismiss_after_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

impl NotificationConfig {
    /// Display time as a [`Duration`]
    #[must_use]
    pub const fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

/// Provider welcome message to hide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeFilterConfig {
    /// Exact sender address of the welcome message
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Case-insensitive subject fragment
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_sender() -> String {
    DEFAULT_WELCOME_SENDER.to_string()
}

fn default_subject() -> String {
    DEFAULT_WELCOME_SUBJECT.to_string()
}

impl Default for WelcomeFilterConfig {
    fn default() -> Self {
        Self {
            sender: default_sender(),
            subject: default_subject(),
        }
    }
}

impl From<&WelcomeFilterConfig> for WelcomeFilter {
    fn from(config: &WelcomeFilterConfig) -> Self {
        Self::new(config.sender.clone(), config.subject.clone())
    }
}

/// External clipboard command
///
/// The address is written to the command's stdin, e.g. `wl-copy`,
/// `xclip -selection clipboard` or `pbcopy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Enable copy-to-clipboard
    #[serde(default)]
    pub enabled: bool,

    /// Program to run
    #[serde(default = "default_command")]
    pub command: String,

    /// Extra arguments
    #[serde(default)]
    pub args: Vec<String>,

    /// Milliseconds to wait for the program to exit
    #[serde(default = "default_clipboard_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_command() -> String {
    "wl-copy".to_string()
}

const fn default_clipboard_timeout_ms() -> u64 {
    2000
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_command(),
            args: Vec::new(),
            timeout_ms: default_clipboard_timeout_ms(),
        }
    }
}

impl ClipboardConfig {
    /// Timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
