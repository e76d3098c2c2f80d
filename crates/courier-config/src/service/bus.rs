//! Bus startup handle.
//!
//! Starting a bus hands it the configuration by shared reference; the bus
//! observes later changes made through the same `Arc`.

use crate::service::configuration::ServiceBusConfiguration;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// A started bus bound to one configuration.
#[derive(Debug)]
pub struct ServiceBus {
    id: Uuid,
    configuration: Arc<ServiceBusConfiguration>,
}

impl ServiceBus {
    /// Start a bus over `configuration`.
    ///
    /// Processing threads are owned by the runtime; this only binds the
    /// configuration and records the startup.
    pub fn start(configuration: Arc<ServiceBusConfiguration>) -> Self {
        let id = Uuid::new_v4();

        info!(
            bus_id = %id,
            serializer = configuration.serializer().name(),
            has_inbox = configuration.has_inbox(),
            has_control_inbox = configuration.has_control_inbox(),
            has_outbox = configuration.has_outbox(),
            is_worker = configuration.is_worker(),
            modules = configuration.modules.len(),
            "Service bus started"
        );

        Self { id, configuration }
    }

    /// Unique id of this bus instance.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The exact configuration instance the bus was started with.
    #[must_use]
    pub fn configuration(&self) -> &Arc<ServiceBusConfiguration> {
        &self.configuration
    }
}

impl ServiceBusConfiguration {
    /// Start a bus bound to this configuration instance.
    pub fn start_service_bus(self: &Arc<Self>) -> ServiceBus {
        ServiceBus::start(Arc::clone(self))
    }
}
