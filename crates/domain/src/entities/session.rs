//! Mailbox session entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EmailAddress, SessionId};

/// A provider session bound to one disposable address
///
/// Sessions are never mutated in place. Regeneration produces a new value
/// that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    email_address: EmailAddress,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session stamped with the current time
    pub fn new(id: SessionId, email_address: EmailAddress) -> Self {
        Self {
            id,
            email_address,
            created_at: Utc::now(),
        }
    }

    /// Override the creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Bind the session to a different address
    ///
    /// Used when the provider reports the address separately from the
    /// session payload it returns on generation.
    #[must_use]
    pub fn with_email_address(mut self, email_address: EmailAddress) -> Self {
        self.email_address = email_address;
        self
    }

    /// Provider token
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    /// Address this session polls
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    /// When the session was issued
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether both values refer to the same provider session
    pub fn is_same(&self, other: &Self) -> bool {
        self.id == other.id && self.email_address == other.email_address
    }
}
