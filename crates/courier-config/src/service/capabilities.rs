//! # Capability Flags
//!
//! Derived, read-only views of the configuration. The runtime uses these to
//! decide which processing threads and pipelines to start.
//!
//! | Flag | True when |
//! |------|-----------|
//! | `has_inbox` | an inbox is configured |
//! | `has_deferred_queue` | the inbox has a deferred queue |
//! | `has_control_inbox` | a control inbox is configured |
//! | `has_outbox` | an outbox is configured |
//! | `is_worker` | a worker configuration is present |
//! | `has_idempotence_service` | an idempotence service is set |
//! | `has_subscription_manager` | a subscription manager is set |
//! | `has_deferred_message_processor` | a deferred message processor is set |
//! | `has_service_bus_section` | the external section could be loaded |
//!
//! Every flag except `has_service_bus_section` is a pure function of the
//! current field values.

use crate::service::configuration::ServiceBusConfiguration;
use serde::Serialize;

impl ServiceBusConfiguration {
    #[must_use]
    pub fn has_inbox(&self) -> bool {
        self.inbox.is_some()
    }

    /// True only when an inbox exists and it has a deferred queue.
    #[must_use]
    pub fn has_deferred_queue(&self) -> bool {
        self.inbox
            .as_ref()
            .is_some_and(|inbox| inbox.deferred_queue.is_some())
    }

    #[must_use]
    pub fn has_control_inbox(&self) -> bool {
        self.control_inbox.is_some()
    }

    #[must_use]
    pub fn has_outbox(&self) -> bool {
        self.outbox.is_some()
    }

    #[must_use]
    pub fn is_worker(&self) -> bool {
        self.worker.is_some()
    }

    #[must_use]
    pub fn has_idempotence_service(&self) -> bool {
        self.idempotence_service.is_some()
    }

    #[must_use]
    pub fn has_subscription_manager(&self) -> bool {
        self.try_subscription_manager().is_some()
    }

    #[must_use]
    pub fn has_deferred_message_processor(&self) -> bool {
        self.deferred_message_processor.is_some()
    }

    /// Whether the external section is available.
    ///
    /// Reads through the section cache, so the first call may load the section.
    #[must_use]
    pub fn has_service_bus_section(&self) -> bool {
        self.service_bus_section().is_some()
    }

    /// Snapshot of every capability flag.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            has_inbox: self.has_inbox(),
            has_deferred_queue: self.has_deferred_queue(),
            has_control_inbox: self.has_control_inbox(),
            has_outbox: self.has_outbox(),
            is_worker: self.is_worker(),
            has_idempotence_service: self.has_idempotence_service(),
            has_subscription_manager: self.has_subscription_manager(),
            has_deferred_message_processor: self.has_deferred_message_processor(),
            has_service_bus_section: self.has_service_bus_section(),
        }
    }
}

/// Point-in-time copy of the capability flags, suitable for logging or a
/// diagnostics endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub has_inbox: bool,
    pub has_deferred_queue: bool,
    pub has_control_inbox: bool,
    pub has_outbox: bool,
    pub is_worker: bool,
    pub has_idempotence_service: bool,
    pub has_subscription_manager: bool,
    pub has_deferred_message_processor: bool,
    pub has_service_bus_section: bool,
}
