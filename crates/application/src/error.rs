//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Cloneable so a single in-flight fetch can hand the same outcome to every
/// caller that joined it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Neither resuming nor generating a session worked
    #[error("Session unavailable: {0}")]
    SessionUnavailable(String),

    /// The provider answered a mailbox request without a mailbox
    #[error("Provider returned no mailbox")]
    NoMailbox,

    /// Listing messages or fetching a message body failed
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Writing to the clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The unread-count signal could not be delivered
    #[error("Badge signal failed: {0}")]
    Badge(String),
}
