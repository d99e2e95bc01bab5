//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod badge_port;
mod clipboard_port;
mod mailbox_port;

pub use badge_port::BadgePort;
#[cfg(test)]
pub use badge_port::MockBadgePort;
pub use clipboard_port::ClipboardPort;
#[cfg(test)]
pub use clipboard_port::MockClipboardPort;
pub use mailbox_port::{GeneratedMailbox, MailboxError, MailboxPort};
#[cfg(test)]
pub use mailbox_port::MockMailboxPort;
