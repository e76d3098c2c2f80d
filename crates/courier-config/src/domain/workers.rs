//! Worker availability records.

/// An idle worker thread announced to a distributor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailableWorker {
    /// Name identifying the worker endpoint (machine and base directory).
    pub identity: String,
    /// Work queue of the worker's inbox.
    pub inbox_work_queue_uri: String,
    /// Runtime-assigned id of the idle thread.
    pub managed_thread_id: u64,
}
