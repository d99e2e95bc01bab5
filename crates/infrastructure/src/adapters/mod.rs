//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod badge_adapter;
mod clipboard_adapter;

pub use badge_adapter::{BadgeSignal, ChannelBadgeAdapter};
pub use clipboard_adapter::CommandClipboardAdapter;
