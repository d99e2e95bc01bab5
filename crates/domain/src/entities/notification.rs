//! Transient status notification

use serde::{Deserialize, Serialize};

/// How a status line is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Success or neutral information
    #[default]
    Info,
    /// Something the user asked for failed
    Error,
}

/// A single status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text to display
    pub text: String,
    /// Styling
    pub severity: Severity,
}

impl Notification {
    /// Informational notification
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    /// Error notification
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    /// Whether this is an error
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}
