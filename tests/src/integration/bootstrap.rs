//! # Bootstrap Flow
//!
//! Default configuration → external section → started bus, checking that the
//! bus works on the very configuration instance it was started from.

#[cfg(test)]
mod tests {
    use crate::fixtures::{isolated_configuration, ScriptedLoader};
    use courier_config::{
        MessageRoute, RouteSpecification, ServiceBusConfigurator, ServiceBusSection,
    };
    use std::sync::Arc;

    fn section() -> ServiceBusSection {
        serde_json::from_str(
            r#"{
                "removeMessagesNotHandled": true,
                "inbox": {
                    "workQueueUri": "memory://inbox-work",
                    "errorQueueUri": "memory://inbox-error",
                    "threadCount": 2
                },
                "controlInbox": {
                    "workQueueUri": "memory://control-work",
                    "errorQueueUri": "memory://control-error"
                },
                "messageRoutes": [
                    { "uri": "memory://orders", "specifications": [ { "startsWith": "Orders." } ] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_section_applied_before_start_is_visible_to_bus() {
        let loader = ScriptedLoader::default();
        loader.set(Some(section()));
        let mut configuration = isolated_configuration(loader);

        assert!(ServiceBusConfigurator::apply_cached(&mut configuration).unwrap());
        let configuration = Arc::new(configuration);
        let bus = configuration.start_service_bus();

        let seen = bus.configuration();
        assert!(Arc::ptr_eq(seen, &configuration));
        assert!(seen.has_inbox());
        assert!(seen.has_control_inbox());
        assert!(!seen.has_outbox());
        assert!(seen.remove_messages_not_handled);
        assert_eq!(seen.inbox.as_ref().unwrap().settings.thread_count, 2);
        assert_eq!(seen.control_inbox.as_ref().unwrap().settings.thread_count, 1);
    }

    #[test]
    fn test_bus_observes_routes_added_after_start() {
        let configuration = Arc::new(isolated_configuration(ScriptedLoader::default()));
        let bus = configuration.start_service_bus();

        configuration.message_route_provider.add(
            MessageRoute::new("memory://billing")
                .with_specification(RouteSpecification::TypeList(vec!["Billing.InvoiceIssued".to_string()])),
        );

        assert_eq!(
            bus.configuration()
                .message_route_provider
                .get_route_uris("Billing.InvoiceIssued"),
            vec!["memory://billing"]
        );
    }

    #[test]
    fn test_inbox_queues_are_shared_by_uri() {
        let loader = ScriptedLoader::default();
        let mut section = section();
        section.outbox = serde_json::from_str(
            r#"{ "workQueueUri": "memory://outbox-work", "errorQueueUri": "memory://inbox-error" }"#,
        )
        .unwrap();
        loader.set(Some(section));
        let mut configuration = isolated_configuration(loader);

        ServiceBusConfigurator::apply_cached(&mut configuration).unwrap();

        let inbox_error = &configuration.inbox.as_ref().unwrap().error_queue;
        let outbox_error = &configuration.outbox.as_ref().unwrap().error_queue;
        assert!(Arc::ptr_eq(inbox_error, outbox_error));
    }

    #[test]
    fn test_capabilities_snapshot_serializes() {
        let loader = ScriptedLoader::default();
        loader.set(Some(section()));
        let mut configuration = isolated_configuration(loader);
        ServiceBusConfigurator::apply_cached(&mut configuration).unwrap();

        let json = serde_json::to_value(configuration.capabilities()).unwrap();

        assert_eq!(json["hasInbox"], true);
        assert_eq!(json["hasDeferredQueue"], false);
        assert_eq!(json["hasServiceBusSection"], true);
        assert_eq!(json["isWorker"], false);
    }
}
