//! Collaboration result - the complete outcome of a wall-bounce run

use crate::collaboration::request::SessionId;
use crate::collaboration::step::CollaborationStep;
use crate::core::model::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bookkeeping attached to every completed collaboration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// When the result was assembled
    pub timestamp: DateTime<Utc>,
    /// Wall-clock time from sequencer entry to aggregation completion
    pub processing_time_ms: u64,
    /// Models whose step succeeded
    pub successful_models: Vec<Model>,
    /// Models whose step failed
    pub failed_models: Vec<Model>,
}

/// Complete result of a wall-bounce collaboration (Entity)
///
/// Only constructed after every requested model has been attempted;
/// partial results are never exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationResult {
    /// The original query text
    pub original_query: String,
    /// Session the request belonged to
    pub session_id: SessionId,
    /// The synthesized/verified answer
    pub final_response: String,
    /// Number of steps attempted, success or failure
    pub wall_bounce_count: usize,
    /// Ordered record of every step
    pub collaboration_history: Vec<CollaborationStep>,
    /// Timing and model-set bookkeeping
    pub metadata: ResultMetadata,
}

impl CollaborationResult {
    /// Returns an iterator over only the successful steps
    pub fn successful_steps(&self) -> impl Iterator<Item = &CollaborationStep> {
        self.collaboration_history.iter().filter(|s| s.is_success())
    }

    /// Returns an iterator over only the failed steps
    pub fn failed_steps(&self) -> impl Iterator<Item = &CollaborationStep> {
        self.collaboration_history.iter().filter(|s| !s.is_success())
    }

    /// True when no model produced an answer
    pub fn is_total_failure(&self) -> bool {
        self.metadata.successful_models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CollaborationResult {
        CollaborationResult {
            original_query: "q".to_string(),
            session_id: SessionId::new("s-1"),
            final_response: "answer".to_string(),
            wall_bounce_count: 2,
            collaboration_history: vec![
                CollaborationStep::success(1, Model::Gpt5, "initial-analysis", "draft"),
                CollaborationStep::failure(2, Model::O3Mini, "final-verification", "timeout"),
            ],
            metadata: ResultMetadata {
                timestamp: Utc::now(),
                processing_time_ms: 12,
                successful_models: vec![Model::Gpt5],
                failed_models: vec![Model::O3Mini],
            },
        }
    }

    #[test]
    fn test_step_partition() {
        let result = sample();
        assert_eq!(result.successful_steps().count(), 1);
        assert_eq!(result.failed_steps().count(), 1);
        assert!(!result.is_total_failure());
    }

    #[test]
    fn test_serializes_with_camel_compatible_fields() {
        let result = sample();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["wall_bounce_count"], 2);
        assert_eq!(json["collaboration_history"].as_array().unwrap().len(), 2);
    }
}
