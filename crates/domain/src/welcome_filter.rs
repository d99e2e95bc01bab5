//! Provider welcome-message filter
//!
//! Guerrilla Mail drops a welcome message into every fresh mailbox. It is
//! noise for the user, so it is removed from each fetched list before the
//! list is shown.

use serde::{Deserialize, Serialize};

use crate::entities::MailMessage;

/// Sender address of the provider's welcome message
pub const DEFAULT_WELCOME_SENDER: &str = "no-reply@guerrillamail.com";

/// Subject fragment identifying the welcome message
pub const DEFAULT_WELCOME_SUBJECT: &str = "welcome to guerrilla mail";

/// Rule matching the provider's sentinel welcome message
///
/// A message matches iff its sender address equals `sender` exactly and its
/// subject contains `subject_fragment`, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeFilter {
    sender: String,
    subject_fragment: String,
}

impl Default for WelcomeFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME_SENDER, DEFAULT_WELCOME_SUBJECT)
    }
}

impl WelcomeFilter {
    /// Build a filter for a specific provider
    pub fn new(sender: impl Into<String>, subject_fragment: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            subject_fragment: subject_fragment.into().to_lowercase(),
        }
    }

    /// Sender address this filter matches
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Lowercased subject fragment this filter matches
    pub fn subject_fragment(&self) -> &str {
        &self.subject_fragment
    }

    /// Whether `message` is the sentinel welcome message
    pub fn is_welcome(&self, message: &MailMessage) -> bool {
        message.from.address == self.sender
            && message
                .subject
                .to_lowercase()
                .contains(&self.subject_fragment)
    }

    /// Drop sentinel messages, keeping the rest in their original order
    pub fn apply(&self, messages: Vec<MailMessage>) -> Vec<MailMessage> {
        messages.into_iter().filter(|m| !self.is_welcome(m)).collect()
    }
}
