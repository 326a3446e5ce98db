//! Wall-bounce sequencer
//!
//! Drives the chain of model calls for one collaboration request. The loop
//! is strictly sequential: each step's prompt depends on the outputs of the
//! steps before it, so the chain must never be parallelized.

use crate::config::ExecutionLimits;
use crate::ports::model_client::{ModelClient, ProviderError, QueryOptions};
use crate::ports::progress::{ProgressNotifier, SequencePhase};
use crate::service::SystemError;
use bounce_domain::{CollaborationRequest, PromptTemplate, StepHistory};
use std::sync::Arc;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Sequencer driving one request through the model chain
///
/// Owns no state across requests; the per-request [`StepHistory`] is
/// created here and handed to the aggregator on completion. Cancellation
/// discards the history along with the in-flight call - no partial result
/// ever leaves the sequencer.
pub struct WallBounceSequencer {
    client: Arc<dyn ModelClient>,
    limits: ExecutionLimits,
}

impl WallBounceSequencer {
    pub fn new(client: Arc<dyn ModelClient>, limits: ExecutionLimits) -> Self {
        Self { client, limits }
    }

    /// Run the chain to completion
    ///
    /// Every requested model is attempted exactly once, in request order.
    /// A provider failure records a failed step and the chain continues;
    /// even an all-failed chain completes normally so the aggregator can
    /// account for every model.
    pub async fn run(
        &self,
        request: &CollaborationRequest,
        cancel: &CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> Result<StepHistory, SystemError> {
        let total = request.models().len();
        let query = request.query().content();
        let system_prompt = PromptTemplate::system(request.task_type());

        info!(
            session = %request.session_id(),
            models = total,
            "Starting wall-bounce sequence"
        );
        progress.on_sequence_start(total);
        progress.on_phase(SequencePhase::Running);

        let mut history = StepHistory::new();

        for (index, model) in request.models().iter().enumerate() {
            let step_number = index + 1;
            progress.on_step_start(step_number, model);

            let context = history.successful_outputs();
            let prompt = if context.is_empty() {
                PromptTemplate::initial(query)
            } else {
                PromptTemplate::bounce(query, &context, self.limits.context_budget_chars)
            };
            debug!(step = step_number, model = %model, prompt_len = prompt.len(), "Dispatching step");

            let role = Self::role_for(step_number, total);
            let options = QueryOptions {
                timeout: self.limits.step_timeout,
                session_id: request.session_id().clone(),
            };

            let outcome = tokio::select! {
                _ = cancel.cancelled() => {
                    info!(session = %request.session_id(), step = step_number, "Request cancelled mid-sequence");
                    return Err(SystemError::Cancelled);
                }
                result = timeout(
                    self.limits.step_timeout,
                    self.client.query(model, system_prompt, &prompt, &options),
                ) => result,
            };

            match outcome {
                Ok(Ok(output)) => {
                    info!(
                        step = step_number,
                        model = %model,
                        tokens = output.tokens_used,
                        latency_ms = output.latency_ms,
                        "Step succeeded"
                    );
                    history.record_success(model.clone(), role, output.text);
                    progress.on_step_complete(step_number, model, true);
                }
                Ok(Err(error)) => {
                    warn!(step = step_number, model = %model, %error, "Step failed");
                    history.record_failure(model.clone(), role, error.to_string());
                    progress.on_step_complete(step_number, model, false);
                }
                Err(_elapsed) => {
                    let error = ProviderError::timeout(format!(
                        "call exceeded {}ms",
                        self.limits.step_timeout.as_millis()
                    ));
                    warn!(step = step_number, model = %model, %error, "Step timed out");
                    history.record_failure(model.clone(), role, error.to_string());
                    progress.on_step_complete(step_number, model, false);
                }
            }
        }

        progress.on_phase(SequencePhase::Aggregating);
        Ok(history)
    }

    /// Role label for a step, derived from its position in the chain
    fn role_for(step_number: usize, total: usize) -> &'static str {
        if step_number == 1 {
            "initial-analysis"
        } else if step_number == total {
            "final-verification"
        } else {
            "cross-validation"
        }
    }
}
