//! Queue transport boundary.
//!
//! Transports live outside this crate. The configuration only needs to look
//! queues up by URI and hold references to them.

use crate::domain::QueueUri;
use crate::error::QueueError;
use std::fmt;
use std::sync::Arc;

/// A queue endpoint supplied by a transport.
pub trait Queue: Send + Sync + fmt::Debug {
    /// The URI this queue was created from.
    fn uri(&self) -> &QueueUri;
}

/// Creates queues for a single URI scheme (e.g. `memory`, `rabbitmq`).
pub trait QueueFactory: Send + Sync {
    /// The scheme this factory handles.
    fn scheme(&self) -> &str;

    /// Create the queue for `uri`.
    fn create(&self, uri: &QueueUri) -> Result<Arc<dyn Queue>, QueueError>;
}

/// Transport abstraction used to resolve queue URIs.
pub trait QueueManager: Send + Sync {
    /// Register a factory. A later factory for the same scheme takes precedence.
    fn register_factory(&self, factory: Box<dyn QueueFactory>);

    /// Whether a factory for `scheme` is registered.
    fn has_factory(&self, scheme: &str) -> bool;

    /// Resolve `uri` to a queue, creating it on first use.
    fn get_queue(&self, uri: &str) -> Result<Arc<dyn Queue>, QueueError>;
}
