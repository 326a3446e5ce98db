//! Execution limits shared by the sequencer and the service

use std::time::Duration;

/// Resource bounds for a single collaboration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionLimits {
    /// Per-model-call timeout; exceeding it records a failed step
    pub step_timeout: Duration,
    /// End-to-end deadline for the whole request; exceeding it is a
    /// system-level failure with no partial result
    pub request_deadline: Duration,
    /// Character budget for forwarded context (0 = unlimited)
    pub context_budget_chars: usize,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            step_timeout: Duration::from_secs(30),
            request_deadline: Duration::from_secs(60),
            context_budget_chars: 0,
        }
    }
}

impl ExecutionLimits {
    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = timeout;
        self
    }

    pub fn with_request_deadline(mut self, deadline: Duration) -> Self {
        self.request_deadline = deadline;
        self
    }

    pub fn with_context_budget_chars(mut self, budget: usize) -> Self {
        self.context_budget_chars = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = ExecutionLimits::default();
        assert_eq!(limits.step_timeout, Duration::from_secs(30));
        assert_eq!(limits.request_deadline, Duration::from_secs(60));
        assert_eq!(limits.context_budget_chars, 0);
    }

    #[test]
    fn test_builders() {
        let limits = ExecutionLimits::default()
            .with_step_timeout(Duration::from_millis(100))
            .with_context_budget_chars(4096);
        assert_eq!(limits.step_timeout, Duration::from_millis(100));
        assert_eq!(limits.context_budget_chars, 4096);
    }
}
