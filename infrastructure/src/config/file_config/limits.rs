//! Execution limits from TOML (`[limits]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [limits]
//! step_timeout_ms = 30000
//! request_deadline_ms = 60000
//! context_budget_chars = 0   # 0 = unlimited
//! ```

use bounce_application::ExecutionLimits;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeouts and the forwarded-context budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLimitsConfig {
    /// Per-model-call timeout in milliseconds
    pub step_timeout_ms: u64,
    /// End-to-end request deadline in milliseconds
    pub request_deadline_ms: u64,
    /// Character budget for forwarded context (0 = unlimited)
    pub context_budget_chars: usize,
}

impl Default for FileLimitsConfig {
    fn default() -> Self {
        Self {
            step_timeout_ms: 30_000,
            request_deadline_ms: 60_000,
            context_budget_chars: 0,
        }
    }
}

impl FileLimitsConfig {
    pub fn to_limits(&self) -> ExecutionLimits {
        ExecutionLimits::default()
            .with_step_timeout(Duration::from_millis(self.step_timeout_ms))
            .with_request_deadline(Duration::from_millis(self.request_deadline_ms))
            .with_context_budget_chars(self.context_budget_chars)
    }
}
