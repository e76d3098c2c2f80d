//! # Courier Telemetry
//!
//! Structured logging for processes hosting a Courier bus.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use courier_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Configure and start the bus here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `COURIER_SERVICE_NAME` | `courier` | Service name attached to the startup event |
//! | `COURIER_LOG_LEVEL` or `RUST_LOG` | `info` | Log level filter |
//! | `COURIER_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `COURIER_JSON_LOGS` | `false` (`true` in containers) | JSON formatted events |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log level could not be parsed as a filter directive.
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber was already installed.
    #[error("Failed to install log subscriber: {0}")]
    SubscriberInit(String),
}
