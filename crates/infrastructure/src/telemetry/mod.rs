//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber: an env-filter plus a text or
//! JSON formatter on stderr.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
