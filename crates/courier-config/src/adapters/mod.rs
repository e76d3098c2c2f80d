//! Adapters Layer - built-in default strategies
//!
//! One default per replaceable port, plus the file-backed section loader.
//! `ServiceBusConfiguration::new()` seeds these; any of them can be swapped
//! for another implementation of the same port.

pub mod file_section_loader;
pub mod json_serializer;
pub mod message_handlers;
pub mod pipeline;
pub mod policy;
pub mod queue_manager;
pub mod routing;
pub mod thread_activity;
pub mod transaction_scope;
pub mod worker_availability;

pub use file_section_loader::{FileSectionLoader, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
pub use json_serializer::JsonSerializer;
pub use message_handlers::DefaultMessageHandlerFactory;
pub use pipeline::DefaultPipelineFactory;
pub use policy::DefaultServiceBusPolicy;
pub use queue_manager::DefaultQueueManager;
pub use routing::DefaultMessageRouteProvider;
pub use thread_activity::{DefaultThreadActivity, DefaultThreadActivityFactory};
pub use transaction_scope::{DefaultTransactionScope, DefaultTransactionScopeFactory, NullTransactionScope};
pub use worker_availability::DefaultWorkerAvailabilityManager;
