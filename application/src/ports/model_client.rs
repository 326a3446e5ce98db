//! Model client port
//!
//! Defines the interface for communicating with LLM providers. Adapters
//! live in the infrastructure layer; one adapter may serve several models
//! (routing is the adapter's concern).

use async_trait::async_trait;
use bounce_domain::{Model, SessionId};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Classification of a single provider call failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderErrorKind {
    /// Credentials rejected or missing
    Auth,
    /// Provider throttled the call
    RateLimit,
    /// The call exceeded its timeout
    Timeout,
    /// Provider returned a 5xx or equivalent upstream failure
    Upstream,
    /// Provider responded but the body could not be interpreted
    MalformedResponse,
}

impl ProviderErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ProviderErrorKind::Auth => "AUTH",
            ProviderErrorKind::RateLimit => "RATE_LIMIT",
            ProviderErrorKind::Timeout => "TIMEOUT",
            ProviderErrorKind::Upstream => "UPSTREAM_5XX",
            ProviderErrorKind::MalformedResponse => "MALFORMED_RESPONSE",
        }
    }

    /// Whether a retry could plausibly succeed
    ///
    /// Retry policy, if any, is internal to a specific client; the
    /// sequencer never retries a step.
    pub fn default_retryable(&self) -> bool {
        match self {
            ProviderErrorKind::Auth | ProviderErrorKind::MalformedResponse => false,
            ProviderErrorKind::RateLimit
            | ProviderErrorKind::Timeout
            | ProviderErrorKind::Upstream => true,
        }
    }
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single model call failure
///
/// Never escapes the sequencer as a top-level error; it is recorded as a
/// failed step and the chain continues.
#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: kind.default_retryable(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Auth, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::RateLimit, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Upstream, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::MalformedResponse, message)
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }
}

/// Options for a single model call
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Per-call timeout; the client must not outlive it
    pub timeout: Duration,
    /// Session the call belongs to
    pub session_id: SessionId,
}

/// Output of a single successful model call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutput {
    /// The model's response text
    pub text: String,
    /// Tokens consumed by the call, when reported by the provider
    pub tokens_used: u64,
    /// Estimated cost in USD, 0.0 when unknown
    pub cost_estimate: f64,
    /// Observed round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Gateway for model communication
///
/// One outbound call per [`query`](ModelClient::query) invocation. The
/// call must honor the supplied timeout and return promptly when the
/// enclosing request is cancelled (the future is simply dropped).
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Whether this client has a binding for the given model
    fn supports(&self, model: &Model) -> bool;

    /// Perform one provider call
    async fn query(
        &self,
        model: &Model,
        system_prompt: &str,
        prompt: &str,
        options: &QueryOptions,
    ) -> Result<ModelOutput, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_defaults() {
        assert!(!ProviderError::auth("401").retryable);
        assert!(!ProviderError::malformed("bad json").retryable);
        assert!(ProviderError::rate_limit("429").retryable);
        assert!(ProviderError::timeout("deadline").retryable);
        assert!(ProviderError::upstream("503").retryable);
    }

    #[test]
    fn test_retryable_override() {
        let err = ProviderError::upstream("501").with_retryable(false);
        assert!(!err.retryable);
    }

    #[test]
    fn test_display_includes_kind() {
        let err = ProviderError::timeout("call exceeded 30s");
        assert_eq!(err.to_string(), "TIMEOUT: call exceeded 30s");
    }
}
