//! Value Objects - Immutable, identity-less domain primitives

mod email_address;
mod message_id;
mod session_id;

pub use email_address::EmailAddress;
pub use message_id::MessageId;
pub use session_id::SessionId;
