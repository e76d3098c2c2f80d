//! # External Configuration Section
//!
//! The `serviceBus` section of the process configuration store, and the
//! cache that loads it lazily.
//!
//! ## Cache Semantics
//!
//! - Empty until the first successful load
//! - A successful load is kept for the life of the cache and never reloaded
//! - A failed load (loader returns `None`) is not cached; the next read retries
//! - Concurrent first reads may both call the loader; the first value stored wins
//!
//! The loader is assumed idempotent and free of side effects, which is what
//! makes the double load above harmless. No lock is held while it runs.

use crate::domain::endpoints::{millis, EndpointSettings};
use crate::domain::routing::MessageRoute;
use crate::domain::transaction::{IsolationLevel, TransactionScopeConfiguration};
use crate::ports::SectionLoader;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Well-known name of the section.
pub const SERVICE_BUS_SECTION_NAME: &str = "serviceBus";

/// The `serviceBus` configuration section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceBusSection {
    /// Left unchanged on the configuration when absent.
    pub remove_messages_not_handled: Option<bool>,
    pub encryption_algorithm: Option<String>,
    pub compression_algorithm: Option<String>,
    /// Falls back to `encryption_algorithm` when unset.
    pub outgoing_encryption_algorithm: Option<String>,
    /// Falls back to `compression_algorithm` when unset.
    pub outgoing_compression_algorithm: Option<String>,
    pub inbox: Option<InboxSection>,
    pub control_inbox: Option<ControlInboxSection>,
    pub outbox: Option<OutboxSection>,
    pub worker: Option<WorkerSection>,
    pub transaction_scope: Option<TransactionScopeSection>,
    pub message_routes: Vec<MessageRoute>,
    pub forwarding_routes: Vec<MessageRoute>,
}

/// Threading and failure overrides shared by the queue sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSection {
    pub thread_count: Option<u32>,
    pub maximum_failure_count: Option<u32>,
    pub duration_to_sleep_when_idle_ms: Option<Vec<u64>>,
    pub duration_to_ignore_on_failure_ms: Option<Vec<u64>>,
}

impl EndpointSection {
    /// Resolve against defaults, using `default_thread_count` when unset.
    #[must_use]
    pub fn to_settings(&self, default_thread_count: u32) -> EndpointSettings {
        let defaults = EndpointSettings::with_thread_count(default_thread_count);

        EndpointSettings {
            thread_count: self.thread_count.unwrap_or(defaults.thread_count),
            maximum_failure_count: self
                .maximum_failure_count
                .unwrap_or(defaults.maximum_failure_count),
            duration_to_sleep_when_idle: self
                .duration_to_sleep_when_idle_ms
                .as_deref()
                .map(millis)
                .unwrap_or(defaults.duration_to_sleep_when_idle),
            duration_to_ignore_on_failure: self
                .duration_to_ignore_on_failure_ms
                .as_deref()
                .map(millis)
                .unwrap_or(defaults.duration_to_ignore_on_failure),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxSection {
    pub work_queue_uri: String,
    pub error_queue_uri: String,
    pub deferred_queue_uri: Option<String>,
    #[serde(default)]
    pub distribute: bool,
    pub distribute_send_count: Option<u32>,
    #[serde(flatten)]
    pub endpoint: EndpointSection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlInboxSection {
    pub work_queue_uri: String,
    pub error_queue_uri: String,
    #[serde(flatten)]
    pub endpoint: EndpointSection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxSection {
    pub work_queue_uri: String,
    pub error_queue_uri: String,
    #[serde(flatten)]
    pub endpoint: EndpointSection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSection {
    pub distributor_control_work_queue_uri: String,
    pub thread_available_notification_interval_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionScopeSection {
    pub enabled: Option<bool>,
    pub isolation_level: Option<IsolationLevel>,
    pub timeout_ms: Option<u64>,
}

impl TransactionScopeSection {
    /// Resolve against the default transaction scope configuration.
    #[must_use]
    pub fn to_configuration(&self) -> TransactionScopeConfiguration {
        let defaults = TransactionScopeConfiguration::default();

        TransactionScopeConfiguration {
            enabled: self.enabled.unwrap_or(defaults.enabled),
            isolation_level: self.isolation_level.unwrap_or(defaults.isolation_level),
            timeout: self
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Lazily populated, load-once-on-success cache of the section.
pub struct SectionCache {
    loader: Box<dyn SectionLoader>,
    slot: RwLock<Option<Arc<ServiceBusSection>>>,
}

impl SectionCache {
    /// An empty cache backed by `loader`.
    pub fn new(loader: impl SectionLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            slot: RwLock::new(None),
        }
    }

    /// The cached section, loading it if the cache is still empty.
    pub fn get(&self) -> Option<Arc<ServiceBusSection>> {
        let cached = self.slot.read().clone();
        if cached.is_some() {
            return cached;
        }

        let Some(loaded) = self.loader.load(SERVICE_BUS_SECTION_NAME) else {
            debug!(section = SERVICE_BUS_SECTION_NAME, "Section unavailable; will retry on next read");
            return None;
        };

        let mut slot = self.slot.write();
        let section = slot.get_or_insert_with(|| {
            debug!(section = SERVICE_BUS_SECTION_NAME, "Section cached");
            Arc::new(loaded)
        });
        Some(Arc::clone(section))
    }

    /// Whether a section is cached. Never triggers a load.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl std::fmt::Debug for SectionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionCache")
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
