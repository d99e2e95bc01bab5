//! Domain layer for the disposable mailbox client
//!
//! Contains the session, message and view-state model plus the provider
//! noise filter. No I/O lives here.

pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod welcome_filter;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
pub use welcome_filter::WelcomeFilter;
