//! Application layer - Use cases and orchestration
//!
//! Session lifecycle, message polling, the list/detail view machine and
//! the notification line, plus the ports the infrastructure layer
//! implements for the mailbox provider, clipboard and badge.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
