//! Collaboration steps and the append-only step history
//!
//! One step is recorded per provider attempt, success or failure. Steps
//! are never mutated after being appended, and step numbers are 1-based
//! with no gaps.

use crate::core::model::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single provider's contribution to a wall-bounce chain (Value Object)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationStep {
    /// 1-based position in the chain
    pub step_number: usize,
    /// The model that produced (or failed to produce) this step
    pub actor: Model,
    /// Free-text label describing the actor's function in this step
    pub role: String,
    /// The model's output; empty when the step failed
    pub output: String,
    /// When the step was recorded
    pub timestamp: DateTime<Utc>,
    /// Error description, present iff this step failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CollaborationStep {
    /// Record a successful step
    pub fn success(
        step_number: usize,
        actor: Model,
        role: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            step_number,
            actor,
            role: role.into(),
            output: output.into(),
            timestamp: Utc::now(),
            error: None,
        }
    }

    /// Record a failed step
    ///
    /// The output is left empty so a failure can never leak into the
    /// context forwarded to later models.
    pub fn failure(
        step_number: usize,
        actor: Model,
        role: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            step_number,
            actor,
            role: role.into(),
            output: String::new(),
            timestamp: Utc::now(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Append-only, ordered record of a single request's steps
///
/// Owned exclusively by the sequencer while the request is in flight,
/// then handed to the aggregator. Step numbers are assigned here so they
/// are strictly increasing from 1 with no gaps by construction.
#[derive(Debug, Default)]
pub struct StepHistory {
    steps: Vec<CollaborationStep>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// The step number the next recorded step will receive
    pub fn next_step_number(&self) -> usize {
        self.steps.len() + 1
    }

    /// Append a successful step
    pub fn record_success(
        &mut self,
        actor: Model,
        role: impl Into<String>,
        output: impl Into<String>,
    ) {
        let step = CollaborationStep::success(self.next_step_number(), actor, role, output);
        self.steps.push(step);
    }

    /// Append a failed step
    pub fn record_failure(
        &mut self,
        actor: Model,
        role: impl Into<String>,
        error: impl Into<String>,
    ) {
        let step = CollaborationStep::failure(self.next_step_number(), actor, role, error);
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[CollaborationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Outputs of successful steps, oldest first
    ///
    /// This is the context forwarded to the next model in the chain;
    /// failed steps are excluded so they cannot poison later prompts.
    pub fn successful_outputs(&self) -> Vec<(&Model, &str)> {
        self.steps
            .iter()
            .filter(|s| s.is_success())
            .map(|s| (&s.actor, s.output.as_str()))
            .collect()
    }

    /// Consume the history, yielding the ordered steps
    pub fn into_steps(self) -> Vec<CollaborationStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_monotonic_from_one() {
        let mut history = StepHistory::new();
        history.record_success(Model::Gpt5, "initial-analysis", "a");
        history.record_failure(Model::Gemini25Pro, "cross-validation", "timeout");
        history.record_success(Model::O3Mini, "final-verification", "c");

        let numbers: Vec<usize> = history.steps().iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_step_has_empty_output() {
        let step = CollaborationStep::failure(1, Model::Gpt5, "initial-analysis", "rate limited");
        assert!(!step.is_success());
        assert!(step.output.is_empty());
        assert_eq!(step.error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_successful_outputs_exclude_failures() {
        let mut history = StepHistory::new();
        history.record_success(Model::Gpt5, "initial-analysis", "first answer");
        history.record_failure(Model::Gemini25Pro, "cross-validation", "timeout");
        history.record_success(Model::O3Mini, "final-verification", "third answer");

        let outputs = history.successful_outputs();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].1, "first answer");
        assert_eq!(outputs[1].1, "third answer");
    }

    #[test]
    fn test_error_omitted_from_json_on_success() {
        let step = CollaborationStep::success(1, Model::Gpt5, "initial-analysis", "ok");
        let json = serde_json::to_string(&step).unwrap();
        assert!(!json.contains("\"error\""));
    }
}
