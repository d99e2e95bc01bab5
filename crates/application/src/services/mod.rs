//! Application services - Use case implementations

mod mailbox_controller;
mod mailbox_formatter;
mod message_poller;
mod notification_center;
mod session_manager;
mod view_controller;

pub use mailbox_controller::{
    ControllerConfig, DEFAULT_POLL_INTERVAL, MailboxController, RefreshOutcome, RegenerateOutcome,
};
pub use mailbox_formatter::{
    DetailView, MessageRow, address_label, body_text, email_count_label, format_time_ago,
    message_rows, subject_label,
};
pub use message_poller::{FetchRole, MessagePoller, PolledList};
pub use notification_center::{DEFAULT_DISMISS_AFTER, NotificationCenter};
pub use session_manager::{Bootstrapped, SessionManager, SessionOrigin};
pub use view_controller::{DETAIL_ERROR_TEXT, DetailOutcome, ViewController};
