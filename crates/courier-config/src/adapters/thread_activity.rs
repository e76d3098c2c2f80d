//! Default idle back-off.

use crate::ports::{ThreadActivity, ThreadActivityFactory};
use std::time::Duration;

/// Wait used when no idle durations are configured.
pub const FALLBACK_IDLE_DURATION: Duration = Duration::from_secs(1);

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultThreadActivityFactory;

impl DefaultThreadActivityFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ThreadActivityFactory for DefaultThreadActivityFactory {
    fn create(&self, idle_durations: &[Duration]) -> Box<dyn ThreadActivity> {
        Box::new(DefaultThreadActivity::new(idle_durations))
    }
}

/// Steps through the idle durations on each idle cycle, staying on the last
/// one, and starts over once work is found.
#[derive(Debug, Clone)]
pub struct DefaultThreadActivity {
    durations: Vec<Duration>,
    index: usize,
}

impl DefaultThreadActivity {
    #[must_use]
    pub fn new(idle_durations: &[Duration]) -> Self {
        let durations = if idle_durations.is_empty() {
            vec![FALLBACK_IDLE_DURATION]
        } else {
            idle_durations.to_vec()
        };
        Self { durations, index: 0 }
    }
}

impl ThreadActivity for DefaultThreadActivity {
    fn waiting(&mut self) -> Duration {
        let duration = self.durations[self.index];
        if self.index + 1 < self.durations.len() {
            self.index += 1;
        }
        duration
    }

    fn working(&mut self) {
        self.index = 0;
    }
}
