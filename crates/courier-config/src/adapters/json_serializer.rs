//! JSON message serializer (the default).

use crate::error::SerializerError;
use crate::ports::Serializer;
use serde_json::Value;

/// Encodes messages as UTF-8 JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub const NAME: &'static str = "json";

    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn serialize(&self, message: &Value) -> Result<Vec<u8>, SerializerError> {
        serde_json::to_vec(message).map_err(|e| SerializerError::Encode(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Value, SerializerError> {
        serde_json::from_slice(bytes).map_err(|e| SerializerError::Decode(e.to_string()))
    }
}
