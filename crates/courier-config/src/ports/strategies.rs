//! Replaceable strategies.
//!
//! Each trait here has a built-in default in `crate::adapters` that
//! `ServiceBusConfiguration::new()` seeds.

use crate::domain::{
    AvailableWorker, EndpointSettings, MessageFailureAction, MessageRoute, Pipeline, PipelineKind,
    TransactionScopeConfiguration,
};
use crate::error::SerializerError;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Message (de)serialization strategy.
pub trait Serializer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Encode a message.
    fn serialize(&self, message: &Value) -> Result<Vec<u8>, SerializerError>;

    /// Decode a message.
    fn deserialize(&self, bytes: &[u8]) -> Result<Value, SerializerError>;
}

/// A handler for one message type. Dispatch happens in the runtime.
pub trait MessageHandler: Send + Sync {
    /// The message type this handler accepts.
    fn message_type(&self) -> &str;
}

/// Resolves handlers by message type.
pub trait MessageHandlerFactory: Send + Sync {
    /// Register a handler, replacing any handler for the same message type.
    fn register_handler(&self, handler: Arc<dyn MessageHandler>);

    /// Handler for `message_type`, if one is registered.
    fn get_handler(&self, message_type: &str) -> Option<Arc<dyn MessageHandler>>;

    /// All message types with a registered handler, sorted.
    fn message_types(&self) -> Vec<String>;
}

/// Maps message types to destination queue URIs.
///
/// Used twice by the configuration: once for outgoing routes and once for
/// forwarding handled messages.
pub trait MessageRouteProvider: Send + Sync {
    /// Add a route. A route equal to one already held is ignored.
    fn add(&self, route: MessageRoute);

    /// URIs of every route matching `message_type`, in route order, without duplicates.
    fn get_route_uris(&self, message_type: &str) -> Vec<String>;

    /// Number of routes held.
    fn route_count(&self) -> usize;
}

/// Hands out pipelines. Stage execution belongs to the runtime.
pub trait PipelineFactory: Send + Sync {
    /// Obtain a pipeline of `kind`.
    fn get_pipeline(&self, kind: PipelineKind) -> Pipeline;

    /// Return a pipeline for reuse.
    fn release_pipeline(&self, pipeline: Pipeline);
}

/// A transactional boundary around message handling.
pub trait TransactionScope: Send {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Mark the work inside the scope as successful.
    fn complete(&mut self);

    /// Whether [`TransactionScope::complete`] was called.
    fn is_completed(&self) -> bool;
}

/// Creates transaction scopes from the configured settings.
pub trait TransactionScopeFactory: Send + Sync {
    /// Create a scope.
    fn create(&self, configuration: &TransactionScopeConfiguration) -> Box<dyn TransactionScope>;
}

/// Decides what happens to a message whose handling failed.
pub trait ServiceBusPolicy: Send + Sync {
    /// Evaluate the `failure_count`-th failure (1-based) for an endpoint.
    fn evaluate_message_handling_failure(
        &self,
        failure_count: u32,
        settings: &EndpointSettings,
    ) -> MessageFailureAction;
}

/// Tracks idle/working state of one processing thread.
pub trait ThreadActivity: Send {
    /// Report an idle cycle; returns how long the caller should wait.
    fn waiting(&mut self) -> Duration;

    /// Report that work was found.
    fn working(&mut self);
}

/// Creates [`ThreadActivity`] trackers.
pub trait ThreadActivityFactory: Send + Sync {
    /// Create a tracker escalating through `idle_durations`.
    fn create(&self, idle_durations: &[Duration]) -> Box<dyn ThreadActivity>;
}

/// Coordinates idle workers for message distribution.
pub trait WorkerAvailabilityManager: Send + Sync {
    /// Record that a worker thread is idle.
    fn worker_available(&self, worker: AvailableWorker);

    /// Take the longest-waiting available worker.
    fn get_available_worker(&self) -> Option<AvailableWorker>;

    /// Drop every entry for a worker thread; returns how many were removed.
    fn remove_by_thread(&self, managed_thread_id: u64) -> usize;

    /// Number of available workers.
    fn available_count(&self) -> usize;
}

/// A cross-cutting extension module.
pub trait BusModule: Send + Sync {
    /// Module name.
    fn name(&self) -> &str;
}
