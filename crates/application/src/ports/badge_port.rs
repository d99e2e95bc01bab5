//! Unread badge port
//!
//! Fire-and-forget signal telling the host that the unread count should be
//! recomputed. Failures are logged by the caller and never change state.

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the external unread-count indicator
#[cfg_attr(test, automock)]
pub trait BadgePort: Send + Sync {
    /// Ask the host to recount unread messages
    ///
    /// Must not block; implementations hand the signal off and return.
    fn check_emails(&self) -> Result<(), ApplicationError>;
}
