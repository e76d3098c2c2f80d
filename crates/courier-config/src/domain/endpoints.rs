//! Queue endpoint configurations.
//!
//! These are opaque to the configuration core beyond presence checks and,
//! for the inbox, presence of a deferred queue.

use crate::ports::Queue;
use std::sync::Arc;
use std::time::Duration;

/// Default processing threads for inbox and outbox.
pub const DEFAULT_THREAD_COUNT: u32 = 5;

/// Default processing threads for the control inbox.
pub const DEFAULT_CONTROL_THREAD_COUNT: u32 = 1;

/// Default number of failures before a message goes to the error queue.
pub const DEFAULT_MAXIMUM_FAILURE_COUNT: u32 = 5;

/// Default idle back-off, in milliseconds.
pub const DEFAULT_IDLE_DURATIONS_MS: [u64; 4] = [250, 500, 1_000, 5_000];

/// Default ignore-after-failure durations, in milliseconds.
pub const DEFAULT_IGNORE_ON_FAILURE_MS: [u64; 3] = [5_000, 30_000, 60_000];

/// Default interval between worker availability notifications.
pub const DEFAULT_THREAD_AVAILABLE_NOTIFICATION_INTERVAL: Duration = Duration::from_secs(15);

/// Threading and failure handling shared by every queue endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointSettings {
    /// Processing threads.
    pub thread_count: u32,
    /// Failures tolerated before a message is moved to the error queue.
    pub maximum_failure_count: u32,
    /// Escalating waits while the queue is empty.
    pub duration_to_sleep_when_idle: Vec<Duration>,
    /// How long a failed message is ignored, indexed by failure count.
    pub duration_to_ignore_on_failure: Vec<Duration>,
}

impl EndpointSettings {
    /// Settings with a specific thread count and defaults elsewhere.
    #[must_use]
    pub fn with_thread_count(thread_count: u32) -> Self {
        Self {
            thread_count,
            ..Self::default()
        }
    }
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            thread_count: DEFAULT_THREAD_COUNT,
            maximum_failure_count: DEFAULT_MAXIMUM_FAILURE_COUNT,
            duration_to_sleep_when_idle: millis(&DEFAULT_IDLE_DURATIONS_MS),
            duration_to_ignore_on_failure: millis(&DEFAULT_IGNORE_ON_FAILURE_MS),
        }
    }
}

pub(crate) fn millis(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_millis).collect()
}

/// Outcome of a failed handling attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageFailureAction {
    /// Whether the message goes back on the work queue.
    pub retry: bool,
    /// How long the message is ignored before the retry.
    pub ignore_for: Duration,
}

/// Incoming work queue configuration.
#[derive(Clone, Debug)]
pub struct InboxQueueConfiguration {
    /// Queue messages are received from.
    pub work_queue: Arc<dyn Queue>,
    /// Queue poison messages are moved to.
    pub error_queue: Arc<dyn Queue>,
    /// Queue holding messages scheduled for later delivery.
    pub deferred_queue: Option<Arc<dyn Queue>>,
    /// Threading and failure handling.
    pub settings: EndpointSettings,
    /// Hand messages to idle workers instead of processing locally.
    pub distribute: bool,
    /// Messages sent to a worker per availability notification.
    pub distribute_send_count: u32,
}

impl InboxQueueConfiguration {
    /// Inbox over `work_queue` and `error_queue` with default settings.
    pub fn new(work_queue: Arc<dyn Queue>, error_queue: Arc<dyn Queue>) -> Self {
        Self {
            work_queue,
            error_queue,
            deferred_queue: None,
            settings: EndpointSettings::default(),
            distribute: false,
            distribute_send_count: DEFAULT_THREAD_COUNT,
        }
    }

    /// Attach a deferred queue.
    #[must_use]
    pub fn with_deferred_queue(mut self, deferred_queue: Arc<dyn Queue>) -> Self {
        self.deferred_queue = Some(deferred_queue);
        self
    }

    /// Replace the endpoint settings.
    #[must_use]
    pub fn with_settings(mut self, settings: EndpointSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Control channel inbox configuration.
#[derive(Clone, Debug)]
pub struct ControlInboxQueueConfiguration {
    /// Queue control messages are received from.
    pub work_queue: Arc<dyn Queue>,
    /// Queue poison control messages are moved to.
    pub error_queue: Arc<dyn Queue>,
    /// Threading and failure handling.
    pub settings: EndpointSettings,
}

impl ControlInboxQueueConfiguration {
    /// Control inbox with a single processing thread.
    pub fn new(work_queue: Arc<dyn Queue>, error_queue: Arc<dyn Queue>) -> Self {
        Self {
            work_queue,
            error_queue,
            settings: EndpointSettings::with_thread_count(DEFAULT_CONTROL_THREAD_COUNT),
        }
    }
}

/// Outgoing queue configuration.
#[derive(Clone, Debug)]
pub struct OutboxQueueConfiguration {
    /// Queue outgoing messages are staged in.
    pub work_queue: Arc<dyn Queue>,
    /// Queue undeliverable messages are moved to.
    pub error_queue: Arc<dyn Queue>,
    /// Threading and failure handling.
    pub settings: EndpointSettings,
}

impl OutboxQueueConfiguration {
    /// Outbox with default settings.
    pub fn new(work_queue: Arc<dyn Queue>, error_queue: Arc<dyn Queue>) -> Self {
        Self {
            work_queue,
            error_queue,
            settings: EndpointSettings::default(),
        }
    }
}

/// Present when this endpoint is a worker behind a distributor.
#[derive(Clone, Debug)]
pub struct WorkerConfiguration {
    /// The distributor's control inbox, notified when threads go idle.
    pub distributor_control_inbox_work_queue: Arc<dyn Queue>,
    /// Minimum interval between availability notifications.
    pub thread_available_notification_interval: Duration,
}

impl WorkerConfiguration {
    /// Worker reporting to `distributor_control_inbox_work_queue`.
    pub fn new(distributor_control_inbox_work_queue: Arc<dyn Queue>) -> Self {
        Self {
            distributor_control_inbox_work_queue,
            thread_available_notification_interval: DEFAULT_THREAD_AVAILABLE_NOTIFICATION_INTERVAL,
        }
    }
}
