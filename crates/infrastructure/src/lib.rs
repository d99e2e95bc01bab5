//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports for the badge channel and the system
//! clipboard, loads configuration and installs logging.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod wiring;

pub use adapters::*;
pub use config::{
    AppConfig, ClipboardConfig, NotificationConfig, PollingConfig, WelcomeFilterConfig,
};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
pub use wiring::{WiredMailbox, build_controller};
