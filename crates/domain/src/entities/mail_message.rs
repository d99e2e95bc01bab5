//! Message summary and detail entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::MessageId;

/// Sender of a message as reported by the provider
///
/// The address is kept verbatim; providers do not always hand out
/// RFC-valid sender strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Display name, when the provider has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw sender address
    pub address: String,
}

impl Sender {
    /// Create a sender with only an address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            name: None,
            address: address.into(),
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name if non-empty, else the address
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.address)
    }
}

/// Summary of a message in the mailbox list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    /// Provider message id
    pub id: MessageId,
    /// Sender
    pub from: Sender,
    /// Subject line (may be empty)
    #[serde(default)]
    pub subject: String,
    /// Short preview of the body
    #[serde(default)]
    pub intro: String,
    /// Provider-assigned label
    #[serde(default)]
    pub category: String,
    /// When the provider received the message
    pub created_at: DateTime<Utc>,
    /// Whether the message has been read
    #[serde(default)]
    pub seen: bool,
}

impl MailMessage {
    /// Create an unread summary received now
    pub fn new(id: MessageId, from: Sender, subject: impl Into<String>) -> Self {
        Self {
            id,
            from,
            subject: subject.into(),
            intro: String::new(),
            category: String::new(),
            created_at: Utc::now(),
            seen: false,
        }
    }

    /// Set the preview text
    #[must_use]
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Set the category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the received timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the read flag
    #[must_use]
    pub const fn with_seen(mut self, seen: bool) -> Self {
        self.seen = seen;
        self
    }
}

/// Full message as returned by a detail fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDetail {
    /// Summary fields
    #[serde(flatten)]
    pub summary: MailMessage,
    /// Plain-text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML body, kept as markup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl MessageDetail {
    /// Create a detail with no body
    pub const fn new(summary: MailMessage) -> Self {
        Self {
            summary,
            text: None,
            html: None,
        }
    }

    /// Set the plain-text body
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the HTML body
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Message id
    pub const fn id(&self) -> &MessageId {
        &self.summary.id
    }
}
