//! Badge adapter - Implements BadgePort over a tokio channel
//!
//! The receiving side belongs to whatever maintains the unread badge; it
//! recounts on every signal.

use application::{error::ApplicationError, ports::BadgePort};
use tokio::sync::mpsc;
use tracing::trace;

/// Signal delivered to the badge owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSignal {
    /// The message list may have changed
    CheckEmails,
}

/// Fire-and-forget badge signalling through an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelBadgeAdapter {
    sender: mpsc::UnboundedSender<BadgeSignal>,
}

impl ChannelBadgeAdapter {
    /// Create an adapter and the receiver the badge owner listens on
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<BadgeSignal>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wrap an existing sender
    pub const fn new(sender: mpsc::UnboundedSender<BadgeSignal>) -> Self {
        Self { sender }
    }
}

impl BadgePort for ChannelBadgeAdapter {
    fn check_emails(&self) -> Result<(), ApplicationError> {
        self.sender
            .send(BadgeSignal::CheckEmails)
            .map_err(|_| ApplicationError::Badge("badge receiver dropped".to_string()))?;
        trace!("Badge signal sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_reaches_receiver() {
        let (adapter, mut receiver) = ChannelBadgeAdapter::channel();
        adapter.check_emails().unwrap();
        adapter.check_emails().unwrap();

        assert_eq!(receiver.try_recv().unwrap(), BadgeSignal::CheckEmails);
        assert_eq!(receiver.try_recv().unwrap(), BadgeSignal::CheckEmails);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn closed_receiver_is_an_error() {
        let (adapter, receiver) = ChannelBadgeAdapter::channel();
        drop(receiver);

        let err = adapter.check_emails().unwrap_err();
        assert!(matches!(err, ApplicationError::Badge(_)));
    }
}
