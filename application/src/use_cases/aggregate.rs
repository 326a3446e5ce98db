//! Result aggregation
//!
//! Pure computation over a completed step history: partitions the model
//! sets, measures processing time, and promotes the final response through
//! the configured synthesis strategy.

use bounce_domain::{
    CollaborationRequest, CollaborationResult, Model, ResultMetadata, StepHistory,
    SynthesisStrategy, TOTAL_FAILURE_SENTINEL,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Turns a completed history into a [`CollaborationResult`]
pub struct ResultAggregator {
    strategy: Arc<dyn SynthesisStrategy>,
}

impl ResultAggregator {
    pub fn new(strategy: Arc<dyn SynthesisStrategy>) -> Self {
        Self { strategy }
    }

    /// Assemble the result
    ///
    /// `started` is the sequencer entry instant; processing time runs from
    /// there to aggregation completion. Every requested model appears in
    /// exactly one of the two model sets because the sequencer records
    /// exactly one step per model.
    pub fn aggregate(
        &self,
        request: &CollaborationRequest,
        history: StepHistory,
        started: Instant,
    ) -> CollaborationResult {
        let steps = history.into_steps();

        let mut successful_models: Vec<Model> = Vec::new();
        let mut failed_models: Vec<Model> = Vec::new();
        for step in &steps {
            if step.is_success() {
                successful_models.push(step.actor.clone());
            } else {
                failed_models.push(step.actor.clone());
            }
        }

        let final_response = self
            .strategy
            .synthesize(&steps)
            .unwrap_or_else(|| TOTAL_FAILURE_SENTINEL.to_string());

        CollaborationResult {
            original_query: request.query().content().to_string(),
            session_id: request.session_id().clone(),
            final_response,
            wall_bounce_count: steps.len(),
            collaboration_history: steps,
            metadata: ResultMetadata {
                timestamp: Utc::now(),
                processing_time_ms: started.elapsed().as_millis() as u64,
                successful_models,
                failed_models,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_domain::collaboration::request::RawRequest;
    use bounce_domain::{LastSuccessful, ModelCatalog, TaskType};
    use std::collections::HashSet;

    fn request(models: &[&str]) -> CollaborationRequest {
        CollaborationRequest::validate(
            RawRequest {
                query: "q".to_string(),
                task_type: TaskType::General,
                models: models.iter().map(|s| s.to_string()).collect(),
                session_id: Some("agg-test".to_string()),
            },
            &ModelCatalog::builtin(),
        )
        .unwrap()
    }

    fn aggregator() -> ResultAggregator {
        ResultAggregator::new(Arc::new(LastSuccessful))
    }

    #[test]
    fn test_model_sets_partition_the_request() {
        let request = request(&["gpt-5", "gemini-2.5-pro", "o3-mini"]);
        let mut history = StepHistory::new();
        history.record_success(Model::Gpt5, "initial-analysis", "a");
        history.record_failure(Model::Gemini25Pro, "cross-validation", "timeout");
        history.record_success(Model::O3Mini, "final-verification", "b");

        let result = aggregator().aggregate(&request, history, Instant::now());

        let successful: HashSet<_> = result.metadata.successful_models.iter().cloned().collect();
        let failed: HashSet<_> = result.metadata.failed_models.iter().cloned().collect();
        assert!(successful.is_disjoint(&failed));

        let mut all: Vec<Model> = successful.union(&failed).cloned().collect();
        all.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        let mut requested: Vec<Model> = request.models().to_vec();
        requested.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(all, requested);
    }

    #[test]
    fn test_bounce_count_equals_history_len() {
        let request = request(&["gpt-5", "o3-mini"]);
        let mut history = StepHistory::new();
        history.record_success(Model::Gpt5, "initial-analysis", "a");
        history.record_success(Model::O3Mini, "final-verification", "b");

        let result = aggregator().aggregate(&request, history, Instant::now());
        assert_eq!(result.wall_bounce_count, 2);
        assert_eq!(result.collaboration_history.len(), 2);
    }

    #[test]
    fn test_final_response_is_last_successful_output() {
        let request = request(&["gpt-5", "gemini-2.5-pro", "o3-mini"]);
        let mut history = StepHistory::new();
        history.record_success(Model::Gpt5, "initial-analysis", "a");
        history.record_success(Model::Gemini25Pro, "cross-validation", "b");
        history.record_success(Model::O3Mini, "final-verification", "final answer");

        let result = aggregator().aggregate(&request, history, Instant::now());
        assert_eq!(result.final_response, "final answer");
        assert_eq!(result.metadata.failed_models.len(), 0);
    }

    #[test]
    fn test_total_failure_uses_sentinel() {
        let request = request(&["gpt-5", "o3-mini"]);
        let mut history = StepHistory::new();
        history.record_failure(Model::Gpt5, "initial-analysis", "auth");
        history.record_failure(Model::O3Mini, "final-verification", "timeout");

        let result = aggregator().aggregate(&request, history, Instant::now());
        assert_eq!(result.final_response, TOTAL_FAILURE_SENTINEL);
        assert!(result.metadata.successful_models.is_empty());
        assert!(result.is_total_failure());
    }
}
