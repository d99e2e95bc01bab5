//! Domain entities - Objects with identity and lifecycle

mod mail_message;
mod mailbox_state;
mod notification;
mod session;

pub use mail_message::{MailMessage, MessageDetail, Sender};
pub use mailbox_state::{DetailPane, DetailTicket, MailboxState, SessionStatus, ViewMode};
pub use notification::{Notification, Severity};
pub use session::Session;
