//! Shared test doubles.

use courier_config::{
    DefaultQueueManager, QueueManager, SectionCache, SectionLoader, ServiceBusConfiguration,
    ServiceBusSection,
};
use courier_host::MemoryQueueFactory;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Section loader whose answer can be changed between reads.
#[derive(Clone, Default)]
pub struct ScriptedLoader {
    section: Arc<Mutex<Option<ServiceBusSection>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedLoader {
    pub fn set(&self, section: Option<ServiceBusSection>) {
        *self.section.lock() = section;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SectionLoader for ScriptedLoader {
    fn load(&self, _section_name: &str) -> Option<ServiceBusSection> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.section.lock().clone()
    }
}

/// A queue manager that serves `memory://` and nothing else.
pub fn memory_queue_manager() -> Arc<DefaultQueueManager> {
    let manager = DefaultQueueManager::new();
    manager.register_factory(Box::new(MemoryQueueFactory));
    Arc::new(manager)
}

/// A configuration isolated from process-wide state.
pub fn isolated_configuration(loader: ScriptedLoader) -> ServiceBusConfiguration {
    ServiceBusConfiguration::builder()
        .with_queue_manager(memory_queue_manager())
        .with_section_cache(Arc::new(SectionCache::new(loader)))
        .build()
}
