//! Ports Layer
//!
//! Capability interfaces the configuration aggregates. Every strategy is a
//! trait object so any implementation of the same capability is a drop-in
//! replacement for the built-in default.
//!
//! - `strategies`: replaceable strategies that always have a default
//! - `transport`: queue lookup and creation
//! - `algorithms`: named encryption and compression transforms
//! - `collaborators`: optional collaborators gated by `has_*` flags

pub mod algorithms;
pub mod collaborators;
pub mod strategies;
pub mod transport;

pub use algorithms::{Algorithm, CompressionAlgorithm, EncryptionAlgorithm};
pub use collaborators::{DeferredMessageProcessor, IdempotenceService, SectionLoader, SubscriptionManager};
pub use strategies::{
    BusModule, MessageHandler, MessageHandlerFactory, MessageRouteProvider, PipelineFactory,
    Serializer, ServiceBusPolicy, ThreadActivity, ThreadActivityFactory, TransactionScope,
    TransactionScopeFactory, WorkerAvailabilityManager,
};
pub use transport::{Queue, QueueFactory, QueueManager};
