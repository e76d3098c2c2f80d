//! # Courier Config - Service Bus Composition Root
//!
//! The single place where every pluggable strategy of a Courier bus is
//! registered before the bus starts, and from which the runtime reads them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  builder / setters   ┌───────────────────────────┐
//! │ Host process │ ───────────────────▶ │ ServiceBusConfiguration   │
//! └──────────────┘                      │  strategies (ports)       │
//!        │                              │  endpoints (domain)       │
//!        │ apply_cached()               │  algorithm registries     │
//!        ▼                              └─────────────┬─────────────┘
//! ┌──────────────┐   section (JSON)                   │ Arc
//! │ SectionCache │ ───────────────────▶ configurator  ▼
//! └──────────────┘                      ┌───────────────────────────┐
//!                                       │ ServiceBus::start()       │
//!                                       └───────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - A fresh configuration has a working default for every replaceable strategy
//! - The serializer can never be unset
//! - Algorithm lookup is case-insensitive and never fails for a missing name
//! - The bus receives the exact configuration instance it was started from
//! - The external section is loaded at most once successfully per cache

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{
    DefaultMessageHandlerFactory, DefaultMessageRouteProvider, DefaultPipelineFactory,
    DefaultQueueManager, DefaultServiceBusPolicy, DefaultThreadActivityFactory,
    DefaultTransactionScopeFactory, DefaultWorkerAvailabilityManager, FileSectionLoader,
    JsonSerializer,
};
pub use domain::{
    AlgorithmRegistry, ControlInboxQueueConfiguration, EndpointSettings, InboxQueueConfiguration,
    MessageRoute, OutboxQueueConfiguration, QueueUri, RouteSpecification, SectionCache,
    ServiceBusSection, TransactionScopeConfiguration, WorkerConfiguration,
};
pub use error::{AlgorithmError, ConfigurationError, QueueError, SerializerError};
pub use ports::{
    Algorithm, CompressionAlgorithm, EncryptionAlgorithm, Queue, QueueFactory, QueueManager,
    SectionLoader, Serializer,
};
pub use service::{
    AlgorithmSlot, Capabilities, ServiceBus, ServiceBusConfiguration,
    ServiceBusConfigurationBuilder, ServiceBusConfigurator,
};
