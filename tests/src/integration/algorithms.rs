//! # Algorithm Flow
//!
//! Real ciphers and compressors registered in a configuration, selected by
//! name and chained the way an outgoing then incoming message is handled:
//! serialize → compress → encrypt, then decrypt → decompress → deserialize.

#[cfg(test)]
mod tests {
    use crate::fixtures::{isolated_configuration, ScriptedLoader};
    use courier_config::{AlgorithmSlot, ServiceBusConfiguration, ServiceBusConfigurator, ServiceBusSection};
    use courier_crypto::{register_default_compression, register_default_encryption, SecretKey};
    use serde_json::json;

    fn configuration(encryption: &str, compression: &str, key: &SecretKey) -> ServiceBusConfiguration {
        let loader = ScriptedLoader::default();
        loader.set(Some(ServiceBusSection {
            encryption_algorithm: Some(encryption.to_string()),
            compression_algorithm: Some(compression.to_string()),
            ..ServiceBusSection::default()
        }));

        let mut configuration = isolated_configuration(loader);
        register_default_compression(configuration.compression_algorithms_mut()).unwrap();
        register_default_encryption(configuration.encryption_algorithms_mut(), key).unwrap();
        ServiceBusConfigurator::apply_cached(&mut configuration).unwrap();
        configuration
    }

    fn send(configuration: &ServiceBusConfiguration, message: &serde_json::Value) -> Vec<u8> {
        let bytes = configuration.serializer().serialize(message).unwrap();
        let compressed = configuration
            .selected_outgoing_compression_algorithm()
            .unwrap()
            .compress(&bytes)
            .unwrap();
        configuration
            .selected_outgoing_encryption_algorithm()
            .unwrap()
            .encrypt(&compressed)
            .unwrap()
    }

    fn receive(configuration: &ServiceBusConfiguration, payload: &[u8]) -> serde_json::Value {
        let compressed = configuration
            .selected_encryption_algorithm()
            .unwrap()
            .decrypt(payload)
            .unwrap();
        let bytes = configuration
            .selected_compression_algorithm()
            .unwrap()
            .decompress(&compressed)
            .unwrap();
        configuration.serializer().deserialize(&bytes).unwrap()
    }

    #[test]
    fn test_message_survives_every_algorithm_pair() {
        let key = SecretKey::generate();
        let message = json!({ "messageType": "Orders.OrderPlaced", "orderId": 42, "lines": ["a", "b"] });

        for encryption in ["xchacha20-poly1305", "AES-256-GCM"] {
            for compression in ["gzip", "Deflate"] {
                let configuration = configuration(encryption, compression, &key);

                let payload = send(&configuration, &message);

                assert_eq!(receive(&configuration, &payload), message);
            }
        }
    }

    #[test]
    fn test_endpoints_sharing_a_key_interoperate() {
        let key = SecretKey::generate();
        let sender = configuration("aes-256-gcm", "gzip", &key);
        let receiver = configuration("aes-256-gcm", "gzip", &key);
        let message = json!({ "messageType": "Billing.InvoiceIssued" });

        let payload = send(&sender, &message);

        assert_eq!(receive(&receiver, &payload), message);
    }

    #[test]
    fn test_different_keys_fail_to_decrypt() {
        let sender = configuration("xchacha20-poly1305", "gzip", &SecretKey::generate());
        let receiver = configuration("xchacha20-poly1305", "gzip", &SecretKey::generate());

        let payload = send(&sender, &json!({ "messageType": "Secret" }));
        let err = receiver
            .selected_encryption_algorithm()
            .unwrap()
            .decrypt(&payload)
            .unwrap_err();

        assert_eq!(err.algorithm, "xchacha20-poly1305");
    }

    #[test]
    fn test_unregistered_selection_resolves_to_none() {
        let mut configuration = configuration("xchacha20-poly1305", "gzip", &SecretKey::generate());

        configuration.set_algorithm_name(AlgorithmSlot::OutgoingEncryption, Some("rc4".to_string()));

        assert_eq!(configuration.outgoing_encryption_algorithm(), Some("rc4"));
        assert!(configuration.selected_outgoing_encryption_algorithm().is_none());
        assert!(configuration.selected_encryption_algorithm().is_some());
    }
}
