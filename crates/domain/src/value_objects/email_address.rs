//! Mailbox address value object
//!
//! The disposable address shown to the user and copied to the clipboard.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! let address = EmailAddress::new("Quiet.Fox@Sharklasers.com").unwrap();
//! assert_eq!(address.as_str(), "quiet.fox@sharklasers.com");
//! assert!(EmailAddress::new("not-an-address").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated mailbox address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new address, validating the format
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the address format is invalid.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let value = address.into().trim().to_lowercase();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidEmailAddress(e.to_string()))?;

        Ok(candidate)
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the local part (before @)
    pub fn local_part(&self) -> &str {
        self.value.split('@').next().unwrap_or("")
    }

    /// Get the domain part (after @)
    ///
    /// ```
    /// use domain::EmailAddress;
    ///
    /// let address = EmailAddress::new("x@guerrillamailblock.com").unwrap();
    /// assert_eq!(address.domain(), "guerrillamailblock.com");
    /// ```
    pub fn domain(&self) -> &str {
        self.value.split('@').nth(1).unwrap_or("")
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_is_accepted() {
        let address = EmailAddress::new("x@y.com").unwrap();
        assert_eq!(address.as_str(), "x@y.com");
    }

    #[test]
    fn address_is_normalized() {
        let address = EmailAddress::new("  Quiet.Fox@Sharklasers.COM ").unwrap();
        assert_eq!(address.as_str(), "quiet.fox@sharklasers.com");
    }

    #[test]
    fn address_parts_are_extracted() {
        let address = EmailAddress::new("quiet.fox@sharklasers.com").unwrap();
        assert_eq!(address.local_part(), "quiet.fox");
        assert_eq!(address.domain(), "sharklasers.com");
    }

    #[test]
    fn invalid_address_is_rejected() {
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("@nodomain.com").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let address = EmailAddress::new("x@y.com").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"x@y.com\"");
    }

    #[test]
    fn deserialization_validates() {
        let parsed: EmailAddress = serde_json::from_str("\"X@Y.com\"").unwrap();
        assert_eq!(parsed.as_str(), "x@y.com");

        let invalid: Result<EmailAddress, _> = serde_json::from_str("\"garbage\"");
        assert!(invalid.is_err());
    }
}
