//! Service Layer - the configuration aggregate and its entry points
//!
//! - `configuration`: `ServiceBusConfiguration` and its builder
//! - `capabilities`: derived `has_*` flags
//! - `configurator`: applies the external section
//! - `bus`: binds a started bus to a configuration

pub mod bus;
pub mod capabilities;
pub mod configuration;
pub mod configurator;

pub use bus::ServiceBus;
pub use capabilities::Capabilities;
pub use configuration::{AlgorithmSlot, ServiceBusConfiguration, ServiceBusConfigurationBuilder};
pub use configurator::ServiceBusConfigurator;
