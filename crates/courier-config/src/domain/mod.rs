//! Domain Layer - configuration values and registries
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Strategies are referenced only through `crate::ports` traits

pub mod algorithms;
pub mod endpoints;
pub mod modules;
pub mod pipeline;
pub mod queue_uri;
pub mod routing;
pub mod section;
pub mod transaction;
pub mod workers;

pub use algorithms::AlgorithmRegistry;
pub use endpoints::{
    ControlInboxQueueConfiguration, EndpointSettings, InboxQueueConfiguration,
    MessageFailureAction, OutboxQueueConfiguration, WorkerConfiguration,
};
pub use modules::ModuleCollection;
pub use pipeline::{Pipeline, PipelineKind};
pub use queue_uri::QueueUri;
pub use routing::{MessageRoute, RouteSpecification};
pub use section::{
    ControlInboxSection, EndpointSection, InboxSection, OutboxSection, SectionCache,
    ServiceBusSection, TransactionScopeSection, WorkerSection, SERVICE_BUS_SECTION_NAME,
};
pub use transaction::{IsolationLevel, TransactionScopeConfiguration};
pub use workers::AvailableWorker;
