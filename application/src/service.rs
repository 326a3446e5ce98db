//! Collaboration service - the public entry point
//!
//! Glues validation, sequencing, and aggregation together for one request.
//! Callers receive either a complete [`CollaborationResult`] or a single
//! terminal [`CollaborationError`]; per-model failures never surface here,
//! they live inside the result's history.

use crate::config::ExecutionLimits;
use crate::ports::model_client::ModelClient;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::aggregate::ResultAggregator;
use crate::use_cases::run_wall_bounce::WallBounceSequencer;
use bounce_domain::{
    CollaborationRequest, CollaborationResult, LastSuccessful, Model, ModelCatalog, RawRequest,
    SynthesisStrategy, ValidationError,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Orchestrator-level faults, distinct from per-model failures
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("No model client bound for {0}")]
    NoClientBound(Model),

    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    #[error("Request cancelled")]
    Cancelled,

    #[error("All models failed to respond")]
    AllModelsFailed,
}

/// Terminal errors a caller can receive
///
/// Validation errors are surfaced before any provider call; system errors
/// mean no result was produced.
#[derive(Error, Debug)]
pub enum CollaborationError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("System error: {0}")]
    System(#[from] SystemError),
}

/// Per-request orchestration entry point
///
/// Holds only read-only configuration; concurrent requests share nothing
/// mutable and may run fully independently.
pub struct CollaborationService {
    client: Arc<dyn ModelClient>,
    catalog: ModelCatalog,
    strategy: Arc<dyn SynthesisStrategy>,
    limits: ExecutionLimits,
}

impl CollaborationService {
    pub fn new(client: Arc<dyn ModelClient>, catalog: ModelCatalog) -> Self {
        Self {
            client,
            catalog,
            strategy: Arc::new(LastSuccessful),
            limits: ExecutionLimits::default(),
        }
    }

    /// Replace the synthesis strategy
    pub fn with_strategy(mut self, strategy: Arc<dyn SynthesisStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the execution limits
    pub fn with_limits(mut self, limits: ExecutionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Process a collaboration request to completion
    pub async fn process_collaborative_query(
        &self,
        raw: RawRequest,
    ) -> Result<CollaborationResult, CollaborationError> {
        self.process_with_progress(raw, CancellationToken::new(), &NoProgress)
            .await
    }

    /// Process a request with cancellation and progress callbacks
    ///
    /// Cancelling the token discards all recorded steps along with the
    /// in-flight call; exceeding the end-to-end deadline does the same.
    pub async fn process_with_progress(
        &self,
        raw: RawRequest,
        cancel: CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> Result<CollaborationResult, CollaborationError> {
        let request = CollaborationRequest::validate(raw, &self.catalog)?;

        // Fail fast before any provider call if a requested model has no
        // bound client.
        for model in request.models() {
            if !self.client.supports(model) {
                warn!(model = %model, "No client bound for requested model");
                return Err(SystemError::NoClientBound(model.clone()).into());
            }
        }

        let started = Instant::now();
        let sequencer = WallBounceSequencer::new(Arc::clone(&self.client), self.limits.clone());
        let aggregator = ResultAggregator::new(Arc::clone(&self.strategy));

        let result = tokio::time::timeout(self.limits.request_deadline, async {
            let history = sequencer.run(&request, &cancel, progress).await?;
            Ok::<CollaborationResult, SystemError>(aggregator.aggregate(&request, history, started))
        })
        .await
        .map_err(|_| SystemError::DeadlineExceeded)?
        .map_err(CollaborationError::from)?;

        if result.is_total_failure() {
            warn!(session = %result.session_id, "Every model in the chain failed");
            return Err(SystemError::AllModelsFailed.into());
        }

        info!(
            session = %result.session_id,
            bounces = result.wall_bounce_count,
            successful = result.metadata.successful_models.len(),
            failed = result.metadata.failed_models.len(),
            elapsed_ms = result.metadata.processing_time_ms,
            "Collaboration complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_client::{ModelOutput, ProviderError, QueryOptions};
    use async_trait::async_trait;
    use bounce_domain::TaskType;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    enum Scripted {
        Ok(&'static str),
        Err(ProviderError),
        Slow(&'static str, Duration),
    }

    struct MockClient {
        script: Mutex<VecDeque<Scripted>>,
        calls: AtomicUsize,
        unsupported: Vec<Model>,
    }

    impl MockClient {
        fn new(script: Vec<Scripted>) -> Self {
            Self {
                script: Mutex::new(VecDeque::from(script)),
                calls: AtomicUsize::new(0),
                unsupported: Vec::new(),
            }
        }

        fn without(mut self, model: Model) -> Self {
            self.unsupported.push(model);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelClient for MockClient {
        fn supports(&self, model: &Model) -> bool {
            !self.unsupported.contains(model)
        }

        async fn query(
            &self,
            _model: &Model,
            _system_prompt: &str,
            _prompt: &str,
            _options: &QueryOptions,
        ) -> Result<ModelOutput, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted");
            let (text, delay) = match next {
                Scripted::Ok(text) => (text, Duration::ZERO),
                Scripted::Err(e) => return Err(e),
                Scripted::Slow(text, delay) => (text, delay),
            };
            tokio::time::sleep(delay).await;
            Ok(ModelOutput {
                text: text.to_string(),
                tokens_used: 1,
                cost_estimate: 0.0,
                latency_ms: delay.as_millis() as u64,
            })
        }
    }

    fn raw(models: &[&str]) -> RawRequest {
        RawRequest {
            query: "Azure Oracle query speed analysis".to_string(),
            task_type: TaskType::Analysis,
            models: models.iter().map(|s| s.to_string()).collect(),
            session_id: None,
        }
    }

    fn service(client: MockClient) -> CollaborationService {
        CollaborationService::new(Arc::new(client), ModelCatalog::builtin())
    }

    #[tokio::test]
    async fn test_scenario_all_succeed() {
        let svc = service(MockClient::new(vec![
            Scripted::Ok("first"),
            Scripted::Ok("second"),
            Scripted::Ok("final verified answer"),
        ]));

        let result = svc
            .process_collaborative_query(raw(&["gpt-5", "gemini-2.5-pro", "o3-mini"]))
            .await
            .unwrap();

        assert_eq!(result.wall_bounce_count, 3);
        assert_eq!(result.metadata.successful_models.len(), 3);
        assert!(result.metadata.failed_models.is_empty());
        assert_eq!(result.final_response, "final verified answer");
    }

    #[tokio::test]
    async fn test_scenario_middle_model_times_out() {
        let svc = service(MockClient::new(vec![
            Scripted::Ok("first"),
            Scripted::Err(ProviderError::timeout("simulated timeout")),
            Scripted::Ok("third"),
        ]));

        let result = svc
            .process_collaborative_query(raw(&["gpt-5", "gemini-2.5-pro", "o3-mini"]))
            .await
            .unwrap();

        assert_eq!(result.wall_bounce_count, 3);
        assert_eq!(
            result.metadata.failed_models,
            vec![Model::Gemini25Pro]
        );
        assert_eq!(result.metadata.successful_models.len(), 2);
        let step2 = &result.collaboration_history[1];
        assert!(step2.error.is_some());
        assert_eq!(result.final_response, "third");
    }

    #[tokio::test]
    async fn test_scenario_single_model_rejected_before_any_call() {
        let client = MockClient::new(vec![]);
        let svc = service(client);

        let err = svc
            .process_collaborative_query(raw(&["gpt-5"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CollaborationError::Validation(ValidationError::TooFewModels(1))
        ));
    }

    #[tokio::test]
    async fn test_validation_failure_makes_zero_provider_calls() {
        let client = Arc::new(MockClient::new(vec![]));
        let svc = CollaborationService::new(client.clone(), ModelCatalog::builtin());

        let err = svc
            .process_collaborative_query(raw(&["gpt-5", "nonexistent-model"]))
            .await
            .unwrap_err();

        assert!(matches!(err, CollaborationError::Validation(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_unbound_model_fails_fast() {
        let client = MockClient::new(vec![]).without(Model::O3Mini);
        let svc = service(client);

        let err = svc
            .process_collaborative_query(raw(&["gpt-5", "o3-mini"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CollaborationError::System(SystemError::NoClientBound(Model::O3Mini))
        ));
    }

    #[tokio::test]
    async fn test_all_failed_surfaces_system_error() {
        let svc = service(MockClient::new(vec![
            Scripted::Err(ProviderError::auth("401")),
            Scripted::Err(ProviderError::upstream("503")),
        ]));

        let err = svc
            .process_collaborative_query(raw(&["gpt-5", "o3-mini"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CollaborationError::System(SystemError::AllModelsFailed)
        ));
    }

    #[tokio::test]
    async fn test_scenario_deadline_exceeded_no_result() {
        let svc = service(MockClient::new(vec![
            Scripted::Slow("slow", Duration::from_millis(300)),
            Scripted::Ok("never reached"),
        ]))
        .with_limits(
            ExecutionLimits::default()
                .with_step_timeout(Duration::from_secs(5))
                .with_request_deadline(Duration::from_millis(100)),
        );

        let err = svc
            .process_collaborative_query(raw(&["gpt-5", "o3-mini"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CollaborationError::System(SystemError::DeadlineExceeded)
        ));
    }

    #[tokio::test]
    async fn test_cancellation_surfaces_cancelled() {
        let svc = service(MockClient::new(vec![Scripted::Slow(
            "slow",
            Duration::from_secs(10),
        )]));

        let cancel = CancellationToken::new();
        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            canceller.cancel();
        });

        let err = svc
            .process_with_progress(raw(&["gpt-5", "o3-mini"]), cancel, &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CollaborationError::System(SystemError::Cancelled)
        ));
    }

    #[tokio::test]
    async fn test_generated_session_id_present_on_result() {
        let svc = service(MockClient::new(vec![
            Scripted::Ok("a"),
            Scripted::Ok("b"),
        ]));

        let result = svc
            .process_collaborative_query(raw(&["gpt-5", "o3-mini"]))
            .await
            .unwrap();

        assert!(!result.session_id.as_str().is_empty());
    }
}
