//! Progress notification port
//!
//! Defines the interface for reporting progress during a wall-bounce run.
//! Implementations live in the presentation layer (console, web UI, etc.)

use bounce_domain::Model;

/// Phase of a wall-bounce run, for progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePhase {
    /// Driving the model chain
    Running,
    /// Assembling the final result
    Aggregating,
}

impl SequencePhase {
    pub fn as_str(&self) -> &str {
        match self {
            SequencePhase::Running => "running",
            SequencePhase::Aggregating => "aggregating",
        }
    }
}

impl std::fmt::Display for SequencePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during a wall-bounce run
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first model call, with the chain length
    fn on_sequence_start(&self, total_steps: usize);

    /// Called when a model call begins (`step` is 1-based)
    fn on_step_start(&self, step: usize, model: &Model);

    /// Called when a step has been recorded
    fn on_step_complete(&self, step: usize, model: &Model, success: bool);

    /// Called on phase transitions after the chain completes
    fn on_phase(&self, _phase: SequencePhase) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_sequence_start(&self, _total_steps: usize) {}
    fn on_step_start(&self, _step: usize, _model: &Model) {}
    fn on_step_complete(&self, _step: usize, _model: &Model, _success: bool) {}
}
