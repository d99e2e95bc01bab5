//! Mailbox provider port
//!
//! Defines the interface to the remote disposable-mailbox service.
//! Every operation can report "no data" (`Ok(None)`) separately from a
//! transport failure (`Err`); the services decide what each means.

use async_trait::async_trait;
use domain::{EmailAddress, MailMessage, MessageDetail, MessageId, Session};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mailbox port errors
#[derive(Debug, Clone, Error)]
pub enum MailboxError {
    #[error("Mailbox service unavailable")]
    ServiceUnavailable,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result of asking the provider for a fresh mailbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMailbox {
    /// Address assigned to the new mailbox
    pub address: EmailAddress,
    /// Session bound to it
    pub session: Session,
}

/// Mailbox port trait
///
/// Implemented by adapters that speak a concrete provider protocol. The
/// session is passed explicitly so adapters need not keep one of their own.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MailboxPort: Send + Sync {
    /// Create a brand new mailbox
    async fn generate_mailbox(&self) -> Result<Option<GeneratedMailbox>, MailboxError>;

    /// Resume the session the provider remembers, if any
    async fn get_session(&self) -> Result<Option<Session>, MailboxError>;

    /// List all messages of the mailbox behind `session`
    async fn get_messages(
        &self,
        session: &Session,
    ) -> Result<Option<Vec<MailMessage>>, MailboxError>;

    /// Fetch one message with its body
    async fn get_message_detail(
        &self,
        session: &Session,
        message_id: &MessageId,
    ) -> Result<Option<MessageDetail>, MailboxError>;
}
