//! Optional collaborators.
//!
//! None of these has a default. The runtime checks the matching `has_*` flag
//! before using one; their storage lives outside this crate.

use crate::domain::ServiceBusSection;
use std::time::SystemTime;
use uuid::Uuid;

/// Prevents re-processing of messages that were already handled.
pub trait IdempotenceService: Send + Sync {
    /// Whether the message should be handled.
    fn should_process(&self, message_id: Uuid) -> bool;

    /// Record that the message was handled.
    fn processing_completed(&self, message_id: Uuid);
}

/// Tracks publish/subscribe registrations.
pub trait SubscriptionManager: Send + Sync {
    /// Subscribe this endpoint to `message_types`.
    fn subscribe(&self, message_types: &[String]);

    /// Inbox URIs subscribed to `message_type`.
    fn get_subscribed_uris(&self, message_type: &str) -> Vec<String>;
}

/// Processes messages held in the deferred queue.
pub trait DeferredMessageProcessor: Send + Sync {
    /// A message was deferred until `ignore_till`.
    fn message_deferred(&self, ignore_till: SystemTime);
}

/// Loads the external configuration section.
pub trait SectionLoader: Send + Sync {
    /// Load the section named `section_name`; `None` when unavailable.
    fn load(&self, section_name: &str) -> Option<ServiceBusSection>;
}
