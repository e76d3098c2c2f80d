//! In-process `memory://` queues.
//!
//! Lets a host resolve every endpoint of a section without an external
//! broker. Queues only carry their address; message transport belongs to
//! the runtime.

use courier_config::{Queue, QueueError, QueueFactory, QueueUri};
use std::sync::Arc;

/// URI scheme served by [`MemoryQueueFactory`].
pub const MEMORY_SCHEME: &str = "memory";

/// A queue living inside this process.
#[derive(Debug)]
pub struct MemoryQueue {
    uri: QueueUri,
}

impl Queue for MemoryQueue {
    fn uri(&self) -> &QueueUri {
        &self.uri
    }
}

/// Creates [`MemoryQueue`]s for `memory://name` URIs.
#[derive(Debug, Default)]
pub struct MemoryQueueFactory;

impl QueueFactory for MemoryQueueFactory {
    fn scheme(&self) -> &str {
        MEMORY_SCHEME
    }

    fn create(&self, uri: &QueueUri) -> Result<Arc<dyn Queue>, QueueError> {
        if uri.path().contains('/') {
            return Err(QueueError::CreationFailed {
                uri: uri.to_string(),
                reason: "memory queue names may not contain '/'".to_string(),
            });
        }
        Ok(Arc::new(MemoryQueue { uri: uri.clone() }))
    }
}
