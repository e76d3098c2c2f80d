//! # Courier Host
//!
//! Reference executable for a Courier endpoint.
//!
//! ## Environment
//!
//! - `COURIER_CONFIG`: path of the JSON file holding the `serviceBus` section
//!   (default `courier.json`; a missing file means built-in defaults)
//! - `COURIER_ENCRYPTION_KEY`: 64 hex characters enabling both ciphers
//! - `COURIER_LOG_LEVEL`, `COURIER_JSON_LOGS`, `COURIER_SERVICE_NAME`: logging

use anyhow::{Context, Result};
use courier_host::{bootstrap, HostOptions};
use courier_telemetry::{init_logging, TelemetryConfig};
use tracing::info;

fn main() -> Result<()> {
    init_logging(&TelemetryConfig::from_env()).context("Failed to initialize logging")?;

    let options = HostOptions::from_env();
    info!(config = %options.config_path.display(), "Starting Courier host");

    let bus = bootstrap(&options)?;

    let capabilities = bus.configuration().capabilities();
    info!(
        bus_id = %bus.id(),
        capabilities = %serde_json::to_string(&capabilities).context("Failed to encode capabilities")?,
        "Courier host ready"
    );

    Ok(())
}
