//! Error types for the configuration core.

use thiserror::Error;

/// Errors raised while composing a bus configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A mandatory argument was absent. The target is left unchanged.
    #[error("Argument '{name}' may not be null")]
    NullArgument { name: &'static str },

    /// The subscription manager was read before one was registered.
    #[error("No subscription manager has been registered. Set one before publishing or subscribing.")]
    SubscriptionManagerUnconfigured,

    /// A queue referenced by the configuration could not be resolved.
    #[error("Queue resolution failed: {0}")]
    Queue(#[from] QueueError),
}

/// Errors from the queue manager and queue factories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The URI does not have a `scheme://` prefix.
    #[error("Invalid queue uri '{uri}': expected 'scheme://path'")]
    InvalidUri { uri: String },

    /// No factory was registered for the URI scheme.
    #[error("No queue factory registered for scheme '{scheme}'")]
    NoFactory { scheme: String },

    /// The factory refused to create the queue.
    #[error("Queue factory could not create '{uri}': {reason}")]
    CreationFailed { uri: String, reason: String },
}

/// Errors from message serializers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializerError {
    /// The message could not be encoded.
    #[error("Serialization failed: {0}")]
    Encode(String),

    /// The payload could not be decoded.
    #[error("Deserialization failed: {0}")]
    Decode(String),
}

/// Failure reported by an encryption or compression algorithm.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Algorithm '{algorithm}' failed: {reason}")]
pub struct AlgorithmError {
    /// Name of the algorithm that failed.
    pub algorithm: String,
    /// Human-readable reason.
    pub reason: String,
}

impl AlgorithmError {
    /// Create a new algorithm error.
    pub fn new(algorithm: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            reason: reason.into(),
        }
    }
}
