//! Provider message identifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a message within one mailbox
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageId(String);

impl MessageId {
    /// Wrap a provider message id
    ///
    /// # Errors
    /// Returns an error if the id is empty or whitespace only
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_identifier("message", id));
        }
        Ok(Self(id))
    }

    /// Get the raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MessageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for MessageId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageId> for String {
    fn from(id: MessageId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_are_accepted() {
        let id = MessageId::new("40213").unwrap();
        assert_eq!(id.as_str(), "40213");
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(MessageId::new("").is_err());
        assert!(MessageId::try_from(" \t").is_err());
    }

    #[test]
    fn ids_can_be_hashed() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(MessageId::new("1").unwrap());
        set.insert(MessageId::new("1").unwrap());
        set.insert(MessageId::new("2").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = MessageId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
