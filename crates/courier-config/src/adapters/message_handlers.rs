//! Default message handler factory: an in-memory registry keyed by message type.

use crate::ports::{MessageHandler, MessageHandlerFactory};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Default)]
pub struct DefaultMessageHandlerFactory {
    handlers: RwLock<BTreeMap<String, Arc<dyn MessageHandler>>>,
}

impl DefaultMessageHandlerFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageHandlerFactory for DefaultMessageHandlerFactory {
    fn register_handler(&self, handler: Arc<dyn MessageHandler>) {
        let message_type = handler.message_type().to_string();
        if self.handlers.write().insert(message_type.clone(), handler).is_some() {
            warn!(message_type = %message_type, "Message handler replaced");
        } else {
            debug!(message_type = %message_type, "Message handler registered");
        }
    }

    fn get_handler(&self, message_type: &str) -> Option<Arc<dyn MessageHandler>> {
        self.handlers.read().get(message_type).cloned()
    }

    fn message_types(&self) -> Vec<String> {
        self.handlers.read().keys().cloned().collect()
    }
}
