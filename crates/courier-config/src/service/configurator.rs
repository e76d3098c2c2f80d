//! # Section Configurator
//!
//! Applies a `ServiceBusSection` to a configuration.
//!
//! ## Order
//!
//! 1. Resolve every queue URI the section names through the configuration's
//!    queue manager
//! 2. Only when all of them resolved, assign endpoints, flags, algorithm names,
//!    the transaction scope and the routes
//!
//! A queue that fails to resolve therefore leaves the configuration untouched.
//! Values the section leaves unset keep whatever the configuration already has.

use crate::domain::endpoints::{
    DEFAULT_CONTROL_THREAD_COUNT, DEFAULT_THREAD_AVAILABLE_NOTIFICATION_INTERVAL, DEFAULT_THREAD_COUNT,
};
use crate::domain::{
    ControlInboxQueueConfiguration, InboxQueueConfiguration, OutboxQueueConfiguration,
    ServiceBusSection, WorkerConfiguration,
};
use crate::error::ConfigurationError;
use crate::ports::{Queue, QueueManager};
use crate::service::configuration::{AlgorithmSlot, ServiceBusConfiguration};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Endpoints resolved from a section, not yet assigned.
struct ResolvedEndpoints {
    inbox: Option<InboxQueueConfiguration>,
    control_inbox: Option<ControlInboxQueueConfiguration>,
    outbox: Option<OutboxQueueConfiguration>,
    worker: Option<WorkerConfiguration>,
}

/// Applies the external section to a configuration.
pub struct ServiceBusConfigurator;

impl ServiceBusConfigurator {
    /// Apply `section` to `configuration`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Queue` when a queue URI cannot be
    /// resolved; nothing has been assigned at that point.
    pub fn apply(
        section: &ServiceBusSection,
        configuration: &mut ServiceBusConfiguration,
    ) -> Result<(), ConfigurationError> {
        let endpoints = resolve_endpoints(section, configuration.queue_manager.as_ref())?;

        if endpoints.inbox.is_some() {
            configuration.inbox = endpoints.inbox;
        }
        if endpoints.control_inbox.is_some() {
            configuration.control_inbox = endpoints.control_inbox;
        }
        if endpoints.outbox.is_some() {
            configuration.outbox = endpoints.outbox;
        }
        if endpoints.worker.is_some() {
            configuration.worker = endpoints.worker;
        }

        if let Some(remove) = section.remove_messages_not_handled {
            configuration.remove_messages_not_handled = remove;
        }

        let names = [
            (AlgorithmSlot::Encryption, section.encryption_algorithm.as_ref()),
            (AlgorithmSlot::Compression, section.compression_algorithm.as_ref()),
            (
                AlgorithmSlot::OutgoingEncryption,
                section
                    .outgoing_encryption_algorithm
                    .as_ref()
                    .or(section.encryption_algorithm.as_ref()),
            ),
            (
                AlgorithmSlot::OutgoingCompression,
                section
                    .outgoing_compression_algorithm
                    .as_ref()
                    .or(section.compression_algorithm.as_ref()),
            ),
        ];
        for (slot, name) in names {
            if let Some(name) = name {
                configuration.set_algorithm_name(slot, Some(name.clone()));
            }
        }

        if let Some(scope) = &section.transaction_scope {
            configuration.transaction_scope = scope.to_configuration();
        }

        for route in &section.message_routes {
            configuration.message_route_provider.add(route.clone());
        }
        for route in &section.forwarding_routes {
            configuration.forwarding_route_provider.add(route.clone());
        }

        info!(
            has_inbox = configuration.has_inbox(),
            has_control_inbox = configuration.has_control_inbox(),
            has_outbox = configuration.has_outbox(),
            is_worker = configuration.is_worker(),
            message_routes = section.message_routes.len(),
            forwarding_routes = section.forwarding_routes.len(),
            "Service bus section applied"
        );
        Ok(())
    }

    /// Apply the configuration's own cached section, if one is available.
    ///
    /// Returns whether a section was applied.
    ///
    /// # Errors
    ///
    /// Same as [`ServiceBusConfigurator::apply`].
    pub fn apply_cached(configuration: &mut ServiceBusConfiguration) -> Result<bool, ConfigurationError> {
        let Some(section) = configuration.service_bus_section() else {
            debug!("No service bus section available; configuration left as built");
            return Ok(false);
        };

        Self::apply(&section, configuration)?;
        Ok(true)
    }
}

fn resolve_endpoints(
    section: &ServiceBusSection,
    queue_manager: &dyn QueueManager,
) -> Result<ResolvedEndpoints, ConfigurationError> {
    let queue = |uri: &str| -> Result<Arc<dyn Queue>, ConfigurationError> { Ok(queue_manager.get_queue(uri)?) };

    let inbox = section
        .inbox
        .as_ref()
        .map(|s| -> Result<_, ConfigurationError> {
            let mut inbox = InboxQueueConfiguration::new(queue(&s.work_queue_uri)?, queue(&s.error_queue_uri)?)
                .with_settings(s.endpoint.to_settings(DEFAULT_THREAD_COUNT));
            if let Some(uri) = &s.deferred_queue_uri {
                inbox = inbox.with_deferred_queue(queue(uri)?);
            }
            inbox.distribute = s.distribute;
            inbox.distribute_send_count = s.distribute_send_count.unwrap_or(inbox.distribute_send_count);
            Ok(inbox)
        })
        .transpose()?;

    let control_inbox = section
        .control_inbox
        .as_ref()
        .map(|s| -> Result<_, ConfigurationError> {
            let mut control =
                ControlInboxQueueConfiguration::new(queue(&s.work_queue_uri)?, queue(&s.error_queue_uri)?);
            control.settings = s.endpoint.to_settings(DEFAULT_CONTROL_THREAD_COUNT);
            Ok(control)
        })
        .transpose()?;

    let outbox = section
        .outbox
        .as_ref()
        .map(|s| -> Result<_, ConfigurationError> {
            let mut outbox = OutboxQueueConfiguration::new(queue(&s.work_queue_uri)?, queue(&s.error_queue_uri)?);
            outbox.settings = s.endpoint.to_settings(DEFAULT_THREAD_COUNT);
            Ok(outbox)
        })
        .transpose()?;

    let worker = section
        .worker
        .as_ref()
        .map(|s| -> Result<_, ConfigurationError> {
            let mut worker = WorkerConfiguration::new(queue(&s.distributor_control_work_queue_uri)?);
            worker.thread_available_notification_interval = s
                .thread_available_notification_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_THREAD_AVAILABLE_NOTIFICATION_INTERVAL);
            Ok(worker)
        })
        .transpose()?;

    Ok(ResolvedEndpoints {
        inbox,
        control_inbox,
        outbox,
        worker,
    })
}
