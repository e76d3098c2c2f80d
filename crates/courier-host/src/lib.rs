//! # Courier Host
//!
//! Composition of a Courier endpoint from defaults, the external section and
//! the built-in algorithms.
//!
//! ## Startup Sequence
//!
//! 1. Build a configuration with an isolated queue manager serving `memory://`
//! 2. Register gzip and deflate compression
//! 3. Register both ciphers when an encryption key is supplied
//! 4. Apply the `serviceBus` section from the configuration file, if present
//! 5. Start the bus on the finished configuration

pub mod memory_queue;

use anyhow::{Context, Result};
use courier_config::{
    DefaultQueueManager, FileSectionLoader, QueueManager, SectionCache, ServiceBus,
    ServiceBusConfiguration, ServiceBusConfigurator,
};
use courier_crypto::{register_default_compression, register_default_encryption, SecretKey};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub use memory_queue::{MemoryQueue, MemoryQueueFactory, MEMORY_SCHEME};

/// Environment variable holding the 64 hex character encryption key.
pub const ENCRYPTION_KEY_ENV: &str = "COURIER_ENCRYPTION_KEY";

/// Inputs of a host startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOptions {
    /// JSON file holding the `serviceBus` section.
    pub config_path: PathBuf,
    /// Hex encoded 256-bit key; no ciphers are registered without one.
    pub encryption_key: Option<String>,
}

impl HostOptions {
    /// Read options from `COURIER_CONFIG` and `COURIER_ENCRYPTION_KEY`.
    pub fn from_env() -> Self {
        Self {
            config_path: FileSectionLoader::from_env().path().to_path_buf(),
            encryption_key: env::var(ENCRYPTION_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty()),
        }
    }
}

/// Compose the configuration described by `options` without starting a bus.
///
/// # Errors
///
/// Fails on a malformed encryption key or when a queue named by the section
/// cannot be resolved.
pub fn build_configuration(options: &HostOptions) -> Result<ServiceBusConfiguration> {
    let queue_manager = DefaultQueueManager::new();
    queue_manager.register_factory(Box::new(MemoryQueueFactory));

    let mut configuration = ServiceBusConfiguration::builder()
        .with_queue_manager(Arc::new(queue_manager))
        .with_section_cache(Arc::new(SectionCache::new(FileSectionLoader::new(
            options.config_path.clone(),
        ))))
        .build();

    register_default_compression(configuration.compression_algorithms_mut())
        .context("Failed to register compression algorithms")?;

    match &options.encryption_key {
        Some(encoded) => {
            let key = SecretKey::from_hex(encoded)
                .with_context(|| format!("{ENCRYPTION_KEY_ENV} must hold 64 hex characters"))?;
            register_default_encryption(configuration.encryption_algorithms_mut(), &key)
                .context("Failed to register encryption algorithms")?;
        }
        None => info!("No encryption key configured; encryption algorithms not registered"),
    }

    let applied = ServiceBusConfigurator::apply_cached(&mut configuration).with_context(|| {
        format!(
            "Failed to apply service bus section from {}",
            options.config_path.display()
        )
    })?;
    if !applied {
        info!(path = %options.config_path.display(), "Running with built-in configuration");
    }

    warn_on_unresolved_algorithms(&configuration);
    Ok(configuration)
}

/// Compose the configuration and start a bus on it.
///
/// # Errors
///
/// Same as [`build_configuration`].
pub fn bootstrap(options: &HostOptions) -> Result<ServiceBus> {
    let configuration = Arc::new(build_configuration(options)?);
    Ok(configuration.start_service_bus())
}

fn warn_on_unresolved_algorithms(configuration: &ServiceBusConfiguration) {
    let encryption = [
        configuration.encryption_algorithm(),
        configuration.outgoing_encryption_algorithm(),
    ];
    for name in encryption.into_iter().flatten() {
        if configuration.find_encryption_algorithm(name).is_none() {
            warn!(algorithm = name, "Selected encryption algorithm is not registered");
        }
    }

    let compression = [
        configuration.compression_algorithm(),
        configuration.outgoing_compression_algorithm(),
    ];
    for name in compression.into_iter().flatten() {
        if configuration.find_compression_algorithm(name).is_none() {
            warn!(algorithm = name, "Selected compression algorithm is not registered");
        }
    }
}
