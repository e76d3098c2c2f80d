//! Default worker availability manager: a FIFO of idle worker threads.

use crate::domain::AvailableWorker;
use crate::ports::WorkerAvailabilityManager;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::trace;

#[derive(Debug, Default)]
pub struct DefaultWorkerAvailabilityManager {
    workers: Mutex<VecDeque<AvailableWorker>>,
}

impl DefaultWorkerAvailabilityManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkerAvailabilityManager for DefaultWorkerAvailabilityManager {
    fn worker_available(&self, worker: AvailableWorker) {
        trace!(
            identity = %worker.identity,
            thread = worker.managed_thread_id,
            "Worker available"
        );
        self.workers.lock().push_back(worker);
    }

    fn get_available_worker(&self) -> Option<AvailableWorker> {
        self.workers.lock().pop_front()
    }

    fn remove_by_thread(&self, managed_thread_id: u64) -> usize {
        let mut workers = self.workers.lock();
        let before = workers.len();
        workers.retain(|w| w.managed_thread_id != managed_thread_id);
        before - workers.len()
    }

    fn available_count(&self) -> usize {
        self.workers.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(thread: u64) -> AvailableWorker {
        AvailableWorker {
            identity: "worker-a".to_string(),
            inbox_work_queue_uri: "memory://worker-a".to_string(),
            managed_thread_id: thread,
        }
    }

    #[test]
    fn test_fifo_order() {
        let manager = DefaultWorkerAvailabilityManager::new();
        manager.worker_available(worker(1));
        manager.worker_available(worker(2));

        assert_eq!(manager.get_available_worker().unwrap().managed_thread_id, 1);
        assert_eq!(manager.get_available_worker().unwrap().managed_thread_id, 2);
        assert!(manager.get_available_worker().is_none());
    }

    #[test]
    fn test_remove_by_thread() {
        let manager = DefaultWorkerAvailabilityManager::new();
        manager.worker_available(worker(1));
        manager.worker_available(worker(2));
        manager.worker_available(worker(1));

        assert_eq!(manager.remove_by_thread(1), 2);
        assert_eq!(manager.available_count(), 1);
        assert_eq!(manager.remove_by_thread(7), 0);
    }
}
