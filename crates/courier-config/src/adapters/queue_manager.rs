//! Default queue manager.
//!
//! Resolves URIs through factories keyed by scheme and caches each queue by
//! its normalized URI, so every endpoint referencing the same URI shares one
//! queue instance.

use crate::domain::QueueUri;
use crate::error::QueueError;
use crate::ports::{Queue, QueueFactory, QueueManager};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Factory registry plus per-URI queue cache.
#[derive(Default)]
pub struct DefaultQueueManager {
    factories: RwLock<Vec<Box<dyn QueueFactory>>>,
    queues: RwLock<HashMap<String, Arc<dyn Queue>>>,
}

impl DefaultQueueManager {
    /// A manager with no factories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default manager.
    pub fn shared() -> Arc<DefaultQueueManager> {
        static SHARED: OnceLock<Arc<DefaultQueueManager>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(DefaultQueueManager::new())))
    }

    /// Number of cached queues.
    #[must_use]
    pub fn cached_queue_count(&self) -> usize {
        self.queues.read().len()
    }
}

impl QueueManager for DefaultQueueManager {
    fn register_factory(&self, factory: Box<dyn QueueFactory>) {
        let scheme = factory.scheme().to_ascii_lowercase();
        let mut factories = self.factories.write();
        factories.retain(|existing| !existing.scheme().eq_ignore_ascii_case(&scheme));
        debug!(scheme = %scheme, "Queue factory registered");
        factories.push(factory);
    }

    fn has_factory(&self, scheme: &str) -> bool {
        self.factories
            .read()
            .iter()
            .any(|f| f.scheme().eq_ignore_ascii_case(scheme))
    }

    fn get_queue(&self, uri: &str) -> Result<Arc<dyn Queue>, QueueError> {
        let uri = QueueUri::parse(uri)?;

        if let Some(queue) = self.queues.read().get(uri.as_str()) {
            return Ok(Arc::clone(queue));
        }

        let queue = {
            let factories = self.factories.read();
            let factory = factories
                .iter()
                .find(|f| f.scheme().eq_ignore_ascii_case(uri.scheme()))
                .ok_or_else(|| QueueError::NoFactory {
                    scheme: uri.scheme().to_string(),
                })?;
            factory.create(&uri)?
        };

        let mut queues = self.queues.write();
        let cached = queues
            .entry(uri.as_str().to_string())
            .or_insert_with(|| {
                debug!(uri = %uri, "Queue created");
                queue
            });
        Ok(Arc::clone(cached))
    }
}
