//! Synthesis strategy - how the final response is chosen from the history
//!
//! The exact synthesis rule is a product decision that may change; the
//! sequencer and aggregator only depend on this trait. The shipped default
//! promotes the last successful step's output as the verified answer.

use crate::collaboration::step::CollaborationStep;

/// Fixed response used when every model in the chain failed
pub const TOTAL_FAILURE_SENTINEL: &str = "All models failed to produce a response.";

/// Pluggable rule for deriving the final response from a completed history
pub trait SynthesisStrategy: Send + Sync {
    /// Derive the final response, or `None` when no step succeeded
    fn synthesize(&self, history: &[CollaborationStep]) -> Option<String>;
}

/// Default strategy: the last successful step's output is the answer
///
/// The last model in the chain saw every prior opinion, so its output is
/// the most cross-checked one available.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastSuccessful;

impl SynthesisStrategy for LastSuccessful {
    fn synthesize(&self, history: &[CollaborationStep]) -> Option<String> {
        history
            .iter()
            .rev()
            .find(|s| s.is_success())
            .map(|s| s.output.clone())
    }
}
