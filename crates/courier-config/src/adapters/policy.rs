//! Default failure policy.

use crate::domain::{EndpointSettings, MessageFailureAction};
use crate::ports::ServiceBusPolicy;
use std::time::Duration;

/// Retries until the endpoint's maximum failure count is reached, ignoring
/// the message for the duration configured for that failure.
///
/// The n-th failure uses the n-th ignore duration; failures past the end of
/// the list reuse the last one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultServiceBusPolicy;

impl DefaultServiceBusPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ServiceBusPolicy for DefaultServiceBusPolicy {
    fn evaluate_message_handling_failure(
        &self,
        failure_count: u32,
        settings: &EndpointSettings,
    ) -> MessageFailureAction {
        if failure_count >= settings.maximum_failure_count {
            return MessageFailureAction {
                retry: false,
                ignore_for: Duration::ZERO,
            };
        }

        let durations = &settings.duration_to_ignore_on_failure;
        let index = usize::try_from(failure_count.saturating_sub(1)).unwrap_or(usize::MAX);
        let ignore_for = durations
            .get(index)
            .or_else(|| durations.last())
            .copied()
            .unwrap_or(Duration::ZERO);

        MessageFailureAction {
            retry: true,
            ignore_for,
        }
    }
}
