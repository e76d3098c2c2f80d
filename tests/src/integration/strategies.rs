//! # Default Strategy Flow
//!
//! Reads every default strategy back out of a fresh configuration and drives
//! it the way the runtime's processing threads would.

#[cfg(test)]
mod tests {
    use crate::fixtures::{isolated_configuration, ScriptedLoader};
    use courier_config::domain::{AvailableWorker, EndpointSettings, IsolationLevel, PipelineKind};
    use std::time::Duration;

    #[test]
    fn test_failure_policy_against_default_settings() {
        let configuration = isolated_configuration(ScriptedLoader::default());
        let settings = EndpointSettings::default();

        let first = configuration.policy.evaluate_message_handling_failure(1, &settings);
        assert!(first.retry);
        assert_eq!(first.ignore_for, Duration::from_secs(5));

        let last = configuration
            .policy
            .evaluate_message_handling_failure(settings.maximum_failure_count, &settings);
        assert!(!last.retry);
    }

    #[test]
    fn test_idle_back_off_escalates_and_resets() {
        let configuration = isolated_configuration(ScriptedLoader::default());
        let settings = EndpointSettings::default();
        let mut activity = configuration
            .thread_activity_factory
            .create(&settings.duration_to_sleep_when_idle);

        let waits: Vec<Duration> = (0..6).map(|_| activity.waiting()).collect();
        assert_eq!(
            waits,
            [250, 500, 1_000, 5_000, 5_000, 5_000].map(Duration::from_millis).to_vec()
        );

        activity.working();
        assert_eq!(activity.waiting(), Duration::from_millis(250));
    }

    #[test]
    fn test_pipelines_are_reused_per_kind() {
        let configuration = isolated_configuration(ScriptedLoader::default());
        let factory = &configuration.pipeline_factory;

        let inbox = factory.get_pipeline(PipelineKind::Inbox);
        let id = inbox.id();
        factory.release_pipeline(inbox);

        assert_ne!(factory.get_pipeline(PipelineKind::Outbox).id(), id);
        assert_eq!(factory.get_pipeline(PipelineKind::Inbox).id(), id);
    }

    #[test]
    fn test_transaction_scope_follows_configuration() {
        let mut configuration = isolated_configuration(ScriptedLoader::default());
        assert_eq!(configuration.transaction_scope.isolation_level, IsolationLevel::ReadCommitted);

        let mut scope = configuration
            .transaction_scope_factory
            .create(&configuration.transaction_scope);
        assert_eq!(scope.name(), "default");
        scope.complete();
        assert!(scope.is_completed());

        configuration.transaction_scope.enabled = false;
        let scope = configuration
            .transaction_scope_factory
            .create(&configuration.transaction_scope);
        assert_eq!(scope.name(), "null");
    }

    #[test]
    fn test_worker_availability_round_trip() {
        let configuration = isolated_configuration(ScriptedLoader::default());
        let manager = configuration.worker_availability_manager();

        for thread in [7, 8, 7] {
            manager.worker_available(AvailableWorker {
                identity: "worker-a".to_string(),
                inbox_work_queue_uri: "memory://worker-a-inbox".to_string(),
                managed_thread_id: thread,
            });
        }

        assert_eq!(manager.remove_by_thread(7), 2);
        let worker = manager.get_available_worker().unwrap();
        assert_eq!(worker.managed_thread_id, 8);
        assert!(manager.get_available_worker().is_none());
    }

    #[test]
    fn test_message_handlers_registered_through_configuration() {
        use courier_config::ports::MessageHandler;
        use std::sync::Arc;

        struct OrderPlaced;

        impl MessageHandler for OrderPlaced {
            fn message_type(&self) -> &str {
                "Orders.OrderPlaced"
            }
        }

        let configuration = isolated_configuration(ScriptedLoader::default());
        configuration.message_handler_factory.register_handler(Arc::new(OrderPlaced));

        assert!(configuration.message_handler_factory.get_handler("Orders.OrderPlaced").is_some());
        assert!(configuration.message_handler_factory.get_handler("orders.orderplaced").is_none());
        assert_eq!(configuration.message_handler_factory.message_types(), vec!["Orders.OrderPlaced"]);
    }
}
