//! # Service Bus Configuration
//!
//! The aggregate every runtime component reads its strategies from.
//!
//! ## Lifecycle
//!
//! 1. `ServiceBusConfiguration::new()` (or the builder) seeds every
//!    replaceable strategy with its built-in default
//! 2. The owner overrides fields, registers algorithms and optionally applies
//!    the external section through `ServiceBusConfigurator`
//! 3. The configuration moves into an `Arc` and `start_service_bus()` hands
//!    that same `Arc` to the bus; from then on it is read-mostly
//!
//! ## Guarded Members
//!
//! - The serializer can never be absent: assigning `None` is rejected
//! - Reading an unset subscription manager is an error, not a silent `None`
//!
//! Cross-field consistency is not checked here. A selected algorithm name
//! that has no registered algorithm, or a deferred queue without a deferred
//! message processor, surfaces in the runtime on first use.

use crate::adapters::{
    DefaultMessageHandlerFactory, DefaultMessageRouteProvider, DefaultPipelineFactory,
    DefaultQueueManager, DefaultServiceBusPolicy, DefaultThreadActivityFactory,
    DefaultTransactionScopeFactory, DefaultWorkerAvailabilityManager, JsonSerializer,
};
use crate::domain::{
    AlgorithmRegistry, ControlInboxQueueConfiguration, InboxQueueConfiguration, ModuleCollection,
    OutboxQueueConfiguration, SectionCache, ServiceBusSection, TransactionScopeConfiguration,
    WorkerConfiguration,
};
use crate::error::ConfigurationError;
use crate::ports::{
    CompressionAlgorithm, DeferredMessageProcessor, EncryptionAlgorithm, IdempotenceService,
    MessageHandlerFactory, MessageRouteProvider, PipelineFactory, QueueManager, Serializer,
    ServiceBusPolicy, SubscriptionManager, ThreadActivityFactory, TransactionScopeFactory,
    WorkerAvailabilityManager,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Which selected algorithm name is being read or assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmSlot {
    /// Decrypting incoming messages.
    Encryption,
    /// Decompressing incoming messages.
    Compression,
    /// Encrypting outgoing messages.
    OutgoingEncryption,
    /// Compressing outgoing messages.
    OutgoingCompression,
}

#[derive(Clone, Debug, Default)]
struct AlgorithmNames {
    encryption: Option<String>,
    compression: Option<String>,
    outgoing_encryption: Option<String>,
    outgoing_compression: Option<String>,
}

impl AlgorithmNames {
    fn slot(&self, slot: AlgorithmSlot) -> &Option<String> {
        match slot {
            AlgorithmSlot::Encryption => &self.encryption,
            AlgorithmSlot::Compression => &self.compression,
            AlgorithmSlot::OutgoingEncryption => &self.outgoing_encryption,
            AlgorithmSlot::OutgoingCompression => &self.outgoing_compression,
        }
    }

    fn slot_mut(&mut self, slot: AlgorithmSlot) -> &mut Option<String> {
        match slot {
            AlgorithmSlot::Encryption => &mut self.encryption,
            AlgorithmSlot::Compression => &mut self.compression,
            AlgorithmSlot::OutgoingEncryption => &mut self.outgoing_encryption,
            AlgorithmSlot::OutgoingCompression => &mut self.outgoing_compression,
        }
    }
}

/// The composed configuration of one bus.
pub struct ServiceBusConfiguration {
    serializer: Arc<dyn Serializer>,

    /// Incoming work queue. `None` means the endpoint only sends.
    pub inbox: Option<InboxQueueConfiguration>,
    /// Control channel inbox.
    pub control_inbox: Option<ControlInboxQueueConfiguration>,
    /// Outgoing staging queue.
    pub outbox: Option<OutboxQueueConfiguration>,
    /// Present when this endpoint works for a distributor.
    pub worker: Option<WorkerConfiguration>,

    pub transaction_scope: TransactionScopeConfiguration,
    pub transaction_scope_factory: Arc<dyn TransactionScopeFactory>,
    pub queue_manager: Arc<dyn QueueManager>,
    pub idempotence_service: Option<Arc<dyn IdempotenceService>>,
    pub modules: ModuleCollection,
    pub message_handler_factory: Arc<dyn MessageHandlerFactory>,
    pub message_route_provider: Arc<dyn MessageRouteProvider>,
    pub forwarding_route_provider: Arc<dyn MessageRouteProvider>,
    pub pipeline_factory: Arc<dyn PipelineFactory>,
    pub policy: Arc<dyn ServiceBusPolicy>,
    pub thread_activity_factory: Arc<dyn ThreadActivityFactory>,
    pub deferred_message_processor: Option<Arc<dyn DeferredMessageProcessor>>,

    /// Acknowledge messages that have no handler instead of failing them.
    pub remove_messages_not_handled: bool,

    worker_availability_manager: Arc<dyn WorkerAvailabilityManager>,
    subscription_manager: Option<Arc<dyn SubscriptionManager>>,
    encryption_algorithms: AlgorithmRegistry<dyn EncryptionAlgorithm>,
    compression_algorithms: AlgorithmRegistry<dyn CompressionAlgorithm>,
    algorithm_names: AlgorithmNames,
    section_cache: Arc<SectionCache>,
}

impl ServiceBusConfiguration {
    /// A configuration with every replaceable strategy set to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a configuration with selected strategies replaced.
    #[must_use]
    pub fn builder() -> ServiceBusConfigurationBuilder {
        ServiceBusConfigurationBuilder::default()
    }

    #[must_use]
    pub fn serializer(&self) -> &Arc<dyn Serializer> {
        &self.serializer
    }

    /// Replace the serializer.
    ///
    /// Assigning the instance already in place is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NullArgument` when `serializer` is `None`;
    /// the current serializer is kept.
    pub fn set_serializer(
        &mut self,
        serializer: Option<Arc<dyn Serializer>>,
    ) -> Result<(), ConfigurationError> {
        let serializer = serializer.ok_or(ConfigurationError::NullArgument { name: "serializer" })?;

        if std::ptr::addr_eq(Arc::as_ptr(&serializer), Arc::as_ptr(&self.serializer)) {
            return Ok(());
        }

        debug!(
            previous = self.serializer.name(),
            serializer = serializer.name(),
            "Serializer replaced"
        );
        self.serializer = serializer;
        Ok(())
    }

    #[must_use]
    pub fn worker_availability_manager(&self) -> &Arc<dyn WorkerAvailabilityManager> {
        &self.worker_availability_manager
    }

    /// The subscription manager, for callers that cannot work without one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::SubscriptionManagerUnconfigured` when none is set.
    pub fn subscription_manager(&self) -> Result<&Arc<dyn SubscriptionManager>, ConfigurationError> {
        self.subscription_manager
            .as_ref()
            .ok_or(ConfigurationError::SubscriptionManagerUnconfigured)
    }

    /// The subscription manager, if one is set.
    #[must_use]
    pub fn try_subscription_manager(&self) -> Option<&Arc<dyn SubscriptionManager>> {
        self.subscription_manager.as_ref()
    }

    /// Set or clear the subscription manager.
    pub fn set_subscription_manager(&mut self, subscription_manager: Option<Arc<dyn SubscriptionManager>>) {
        self.subscription_manager = subscription_manager;
    }

    #[must_use]
    pub fn encryption_algorithms(&self) -> &AlgorithmRegistry<dyn EncryptionAlgorithm> {
        &self.encryption_algorithms
    }

    /// Mutable access for registration. The registry only supports appending.
    pub fn encryption_algorithms_mut(&mut self) -> &mut AlgorithmRegistry<dyn EncryptionAlgorithm> {
        &mut self.encryption_algorithms
    }

    #[must_use]
    pub fn compression_algorithms(&self) -> &AlgorithmRegistry<dyn CompressionAlgorithm> {
        &self.compression_algorithms
    }

    /// Mutable access for registration. The registry only supports appending.
    pub fn compression_algorithms_mut(&mut self) -> &mut AlgorithmRegistry<dyn CompressionAlgorithm> {
        &mut self.compression_algorithms
    }

    #[must_use]
    pub fn find_encryption_algorithm(&self, name: &str) -> Option<&dyn EncryptionAlgorithm> {
        self.encryption_algorithms.find(name)
    }

    #[must_use]
    pub fn find_compression_algorithm(&self, name: &str) -> Option<&dyn CompressionAlgorithm> {
        self.compression_algorithms.find(name)
    }

    /// Assign a selected algorithm name. The name is not checked against the
    /// registries.
    pub fn set_algorithm_name(&mut self, slot: AlgorithmSlot, name: Option<String>) {
        *self.algorithm_names.slot_mut(slot) = name;
    }

    #[must_use]
    pub fn algorithm_name(&self, slot: AlgorithmSlot) -> Option<&str> {
        self.algorithm_names.slot(slot).as_deref()
    }

    #[must_use]
    pub fn encryption_algorithm(&self) -> Option<&str> {
        self.algorithm_name(AlgorithmSlot::Encryption)
    }

    #[must_use]
    pub fn compression_algorithm(&self) -> Option<&str> {
        self.algorithm_name(AlgorithmSlot::Compression)
    }

    #[must_use]
    pub fn outgoing_encryption_algorithm(&self) -> Option<&str> {
        self.algorithm_name(AlgorithmSlot::OutgoingEncryption)
    }

    #[must_use]
    pub fn outgoing_compression_algorithm(&self) -> Option<&str> {
        self.algorithm_name(AlgorithmSlot::OutgoingCompression)
    }

    /// The registered algorithm matching the selected incoming encryption name.
    #[must_use]
    pub fn selected_encryption_algorithm(&self) -> Option<&dyn EncryptionAlgorithm> {
        self.encryption_algorithm()
            .and_then(|name| self.find_encryption_algorithm(name))
    }

    /// The registered algorithm matching the selected incoming compression name.
    #[must_use]
    pub fn selected_compression_algorithm(&self) -> Option<&dyn CompressionAlgorithm> {
        self.compression_algorithm()
            .and_then(|name| self.find_compression_algorithm(name))
    }

    #[must_use]
    pub fn selected_outgoing_encryption_algorithm(&self) -> Option<&dyn EncryptionAlgorithm> {
        self.outgoing_encryption_algorithm()
            .and_then(|name| self.find_encryption_algorithm(name))
    }

    #[must_use]
    pub fn selected_outgoing_compression_algorithm(&self) -> Option<&dyn CompressionAlgorithm> {
        self.outgoing_compression_algorithm()
            .and_then(|name| self.find_compression_algorithm(name))
    }

    #[must_use]
    pub fn section_cache(&self) -> &Arc<SectionCache> {
        &self.section_cache
    }

    /// The external section, loading it through the cache if necessary.
    #[must_use]
    pub fn service_bus_section(&self) -> Option<Arc<ServiceBusSection>> {
        self.section_cache.get()
    }
}

impl Default for ServiceBusConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceBusConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceBusConfiguration")
            .field("serializer", &self.serializer.name())
            .field("inbox", &self.inbox.is_some())
            .field("control_inbox", &self.control_inbox.is_some())
            .field("outbox", &self.outbox.is_some())
            .field("worker", &self.worker.is_some())
            .field("transaction_scope", &self.transaction_scope)
            .field("modules", &self.modules)
            .field("remove_messages_not_handled", &self.remove_messages_not_handled)
            .field("algorithm_names", &self.algorithm_names)
            .field("encryption_algorithms", &self.encryption_algorithms)
            .field("compression_algorithms", &self.compression_algorithms)
            .field("section_cache", &self.section_cache)
            .finish_non_exhaustive()
    }
}

/// Builds a [`ServiceBusConfiguration`], seeding a default for every
/// strategy that was not supplied.
///
/// # Example
///
/// ```ignore
/// let configuration = ServiceBusConfiguration::builder()
///     .with_serializer(Arc::new(MySerializer))
///     .with_section_cache(Arc::new(SectionCache::new(my_loader)))
///     .build();
/// ```
#[derive(Default)]
pub struct ServiceBusConfigurationBuilder {
    serializer: Option<Arc<dyn Serializer>>,
    queue_manager: Option<Arc<dyn QueueManager>>,
    message_handler_factory: Option<Arc<dyn MessageHandlerFactory>>,
    message_route_provider: Option<Arc<dyn MessageRouteProvider>>,
    forwarding_route_provider: Option<Arc<dyn MessageRouteProvider>>,
    pipeline_factory: Option<Arc<dyn PipelineFactory>>,
    transaction_scope_factory: Option<Arc<dyn TransactionScopeFactory>>,
    policy: Option<Arc<dyn ServiceBusPolicy>>,
    thread_activity_factory: Option<Arc<dyn ThreadActivityFactory>>,
    worker_availability_manager: Option<Arc<dyn WorkerAvailabilityManager>>,
    section_cache: Option<Arc<SectionCache>>,
}

impl ServiceBusConfigurationBuilder {
    #[must_use]
    pub fn with_serializer(mut self, serializer: Arc<dyn Serializer>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    #[must_use]
    pub fn with_queue_manager(mut self, queue_manager: Arc<dyn QueueManager>) -> Self {
        self.queue_manager = Some(queue_manager);
        self
    }

    #[must_use]
    pub fn with_message_handler_factory(mut self, factory: Arc<dyn MessageHandlerFactory>) -> Self {
        self.message_handler_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn with_message_route_provider(mut self, provider: Arc<dyn MessageRouteProvider>) -> Self {
        self.message_route_provider = Some(provider);
        self
    }

    #[must_use]
    pub fn with_forwarding_route_provider(mut self, provider: Arc<dyn MessageRouteProvider>) -> Self {
        self.forwarding_route_provider = Some(provider);
        self
    }

    #[must_use]
    pub fn with_pipeline_factory(mut self, factory: Arc<dyn PipelineFactory>) -> Self {
        self.pipeline_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn with_transaction_scope_factory(mut self, factory: Arc<dyn TransactionScopeFactory>) -> Self {
        self.transaction_scope_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Arc<dyn ServiceBusPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    #[must_use]
    pub fn with_thread_activity_factory(mut self, factory: Arc<dyn ThreadActivityFactory>) -> Self {
        self.thread_activity_factory = Some(factory);
        self
    }

    #[must_use]
    pub fn with_worker_availability_manager(mut self, manager: Arc<dyn WorkerAvailabilityManager>) -> Self {
        self.worker_availability_manager = Some(manager);
        self
    }

    /// Use `section_cache` instead of the process-wide [`SectionCache::shared`].
    #[must_use]
    pub fn with_section_cache(mut self, section_cache: Arc<SectionCache>) -> Self {
        self.section_cache = Some(section_cache);
        self
    }

    /// Build the configuration. Optional collaborators start absent.
    #[must_use]
    pub fn build(self) -> ServiceBusConfiguration {
        let configuration = ServiceBusConfiguration {
            serializer: self.serializer.unwrap_or_else(|| Arc::new(JsonSerializer::new())),
            inbox: None,
            control_inbox: None,
            outbox: None,
            worker: None,
            transaction_scope: TransactionScopeConfiguration::default(),
            transaction_scope_factory: self
                .transaction_scope_factory
                .unwrap_or_else(|| Arc::new(DefaultTransactionScopeFactory::new())),
            queue_manager: self
                .queue_manager
                .unwrap_or_else(|| DefaultQueueManager::shared()),
            idempotence_service: None,
            modules: ModuleCollection::new(),
            message_handler_factory: self
                .message_handler_factory
                .unwrap_or_else(|| Arc::new(DefaultMessageHandlerFactory::new())),
            message_route_provider: self
                .message_route_provider
                .unwrap_or_else(|| Arc::new(DefaultMessageRouteProvider::new())),
            forwarding_route_provider: self
                .forwarding_route_provider
                .unwrap_or_else(|| Arc::new(DefaultMessageRouteProvider::forwarding())),
            pipeline_factory: self
                .pipeline_factory
                .unwrap_or_else(|| Arc::new(DefaultPipelineFactory::new())),
            policy: self
                .policy
                .unwrap_or_else(|| Arc::new(DefaultServiceBusPolicy::new())),
            thread_activity_factory: self
                .thread_activity_factory
                .unwrap_or_else(|| Arc::new(DefaultThreadActivityFactory::new())),
            deferred_message_processor: None,
            remove_messages_not_handled: false,
            worker_availability_manager: self
                .worker_availability_manager
                .unwrap_or_else(|| Arc::new(DefaultWorkerAvailabilityManager::new())),
            subscription_manager: None,
            encryption_algorithms: AlgorithmRegistry::new("encryption"),
            compression_algorithms: AlgorithmRegistry::new("compression"),
            algorithm_names: AlgorithmNames::default(),
            section_cache: self.section_cache.unwrap_or_else(SectionCache::shared),
        };

        debug!(serializer = configuration.serializer.name(), "Service bus configuration built");
        configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlgorithmError, SerializerError};
    use crate::ports::{Algorithm, SectionLoader};
    use serde_json::Value;

    struct NoSection;

    impl SectionLoader for NoSection {
        fn load(&self, _section_name: &str) -> Option<ServiceBusSection> {
            None
        }
    }

    fn configuration() -> ServiceBusConfiguration {
        ServiceBusConfiguration::builder()
            .with_section_cache(Arc::new(SectionCache::new(NoSection)))
            .with_queue_manager(Arc::new(DefaultQueueManager::new()))
            .build()
    }

    struct Utf8Serializer;

    impl Serializer for Utf8Serializer {
        fn name(&self) -> &str {
            "utf8"
        }

        fn serialize(&self, message: &Value) -> Result<Vec<u8>, SerializerError> {
            Ok(message.to_string().into_bytes())
        }

        fn deserialize(&self, bytes: &[u8]) -> Result<Value, SerializerError> {
            Ok(Value::String(String::from_utf8_lossy(bytes).into_owned()))
        }
    }

    struct Recorder;

    impl SubscriptionManager for Recorder {
        fn subscribe(&self, _message_types: &[String]) {}

        fn get_subscribed_uris(&self, _message_type: &str) -> Vec<String> {
            vec!["memory://subscriber".to_string()]
        }
    }

    struct Identity(&'static str);

    impl Algorithm for Identity {
        fn name(&self) -> &str {
            self.0
        }
    }

    impl CompressionAlgorithm for Identity {
        fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
            Ok(bytes.to_vec())
        }

        fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
            Ok(bytes.to_vec())
        }
    }

    #[test]
    fn test_new_seeds_defaults() {
        let configuration = configuration();

        assert_eq!(configuration.serializer().name(), JsonSerializer::NAME);
        assert_eq!(configuration.message_route_provider.route_count(), 0);
        assert_eq!(configuration.forwarding_route_provider.route_count(), 0);
        assert!(configuration.message_handler_factory.message_types().is_empty());
        assert_eq!(configuration.worker_availability_manager().available_count(), 0);
        assert!(configuration.modules.is_empty());
        assert_eq!(configuration.transaction_scope, TransactionScopeConfiguration::default());
        assert!(!configuration.remove_messages_not_handled);

        assert!(configuration.inbox.is_none());
        assert!(configuration.control_inbox.is_none());
        assert!(configuration.outbox.is_none());
        assert!(configuration.worker.is_none());
        assert!(configuration.idempotence_service.is_none());
        assert!(configuration.deferred_message_processor.is_none());
        assert!(configuration.try_subscription_manager().is_none());
    }

    #[test]
    fn test_default_queue_manager_is_process_wide() {
        let a = ServiceBusConfiguration::builder()
            .with_section_cache(Arc::new(SectionCache::new(NoSection)))
            .build();
        let b = ServiceBusConfiguration::builder()
            .with_section_cache(Arc::new(SectionCache::new(NoSection)))
            .build();

        assert!(std::ptr::addr_eq(
            Arc::as_ptr(&a.queue_manager),
            Arc::as_ptr(&b.queue_manager)
        ));
    }

    #[test]
    fn test_set_serializer_preserves_identity() {
        let mut configuration = configuration();
        let serializer: Arc<dyn Serializer> = Arc::new(Utf8Serializer);

        configuration.set_serializer(Some(Arc::clone(&serializer))).unwrap();

        assert!(Arc::ptr_eq(configuration.serializer(), &serializer));
    }

    #[test]
    fn test_set_serializer_none_keeps_previous() {
        let mut configuration = configuration();
        let serializer: Arc<dyn Serializer> = Arc::new(Utf8Serializer);
        configuration.set_serializer(Some(Arc::clone(&serializer))).unwrap();

        let result = configuration.set_serializer(None);

        assert_eq!(result, Err(ConfigurationError::NullArgument { name: "serializer" }));
        assert!(Arc::ptr_eq(configuration.serializer(), &serializer));
    }

    #[test]
    fn test_set_same_serializer_is_noop() {
        let mut configuration = configuration();
        let current = Arc::clone(configuration.serializer());

        configuration.set_serializer(Some(Arc::clone(&current))).unwrap();

        assert!(Arc::ptr_eq(configuration.serializer(), &current));
    }

    #[test]
    fn test_subscription_manager_unconfigured() {
        let configuration = configuration();

        assert!(matches!(
            configuration.subscription_manager(),
            Err(ConfigurationError::SubscriptionManagerUnconfigured)
        ));
    }

    #[test]
    fn test_subscription_manager_set_and_cleared() {
        let mut configuration = configuration();
        let manager: Arc<dyn SubscriptionManager> = Arc::new(Recorder);

        configuration.set_subscription_manager(Some(Arc::clone(&manager)));
        let resolved = configuration.subscription_manager().unwrap();
        assert!(Arc::ptr_eq(resolved, &manager));
        assert_eq!(resolved.get_subscribed_uris("Any"), vec!["memory://subscriber"]);

        configuration.set_subscription_manager(None);
        assert!(configuration.subscription_manager().is_err());
    }

    #[test]
    fn test_algorithm_names_are_not_validated() {
        let mut configuration = configuration();

        configuration.set_algorithm_name(AlgorithmSlot::Encryption, Some("aes".to_string()));
        configuration.set_algorithm_name(AlgorithmSlot::OutgoingCompression, Some("gzip".to_string()));

        assert_eq!(configuration.encryption_algorithm(), Some("aes"));
        assert_eq!(configuration.outgoing_compression_algorithm(), Some("gzip"));
        assert_eq!(configuration.compression_algorithm(), None);
        assert!(configuration.selected_encryption_algorithm().is_none());

        configuration.set_algorithm_name(AlgorithmSlot::Encryption, None);
        assert_eq!(configuration.algorithm_name(AlgorithmSlot::Encryption), None);
    }

    #[test]
    fn test_selected_algorithm_resolves_after_registration() {
        let mut configuration = configuration();
        configuration.set_algorithm_name(AlgorithmSlot::Compression, Some("GZIP".to_string()));
        assert!(configuration.selected_compression_algorithm().is_none());

        configuration
            .compression_algorithms_mut()
            .add(Some(Box::new(Identity("gzip"))))
            .unwrap();

        let selected = configuration.selected_compression_algorithm().unwrap();
        assert_eq!(selected.name(), "gzip");
        assert!(configuration.selected_outgoing_compression_algorithm().is_none());
        assert!(configuration.find_encryption_algorithm("gzip").is_none());
    }

    #[test]
    fn test_builder_overrides_one_strategy() {
        let serializer: Arc<dyn Serializer> = Arc::new(Utf8Serializer);
        let configuration = ServiceBusConfiguration::builder()
            .with_serializer(Arc::clone(&serializer))
            .with_section_cache(Arc::new(SectionCache::new(NoSection)))
            .build();

        assert!(Arc::ptr_eq(configuration.serializer(), &serializer));
        assert_eq!(configuration.message_route_provider.route_count(), 0);
    }
}
