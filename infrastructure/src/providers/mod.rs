//! Provider adapters and the model-routing registry
//!
//! Each LLM vendor's distinct call shape sits behind the same
//! [`ProviderAdapter`] trait; [`ClientRegistry`] routes a model to the
//! adapter that serves it and presents the whole set to the application
//! layer as one [`ModelClient`].

pub mod gemini;
pub mod openai;

use crate::config::FileConfig;
use async_trait::async_trait;
use bounce_application::{ModelClient, ModelOutput, ProviderError, QueryOptions};
use bounce_domain::Model;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

/// The vendors an adapter can represent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "openai" => Some(ProviderKind::OpenAi),
            "gemini" => Some(ProviderKind::Gemini),
            _ => None,
        }
    }
}

/// A single vendor's client implementation
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// One outbound call to this vendor
    async fn query(
        &self,
        model: &Model,
        system_prompt: &str,
        prompt: &str,
        options: &QueryOptions,
    ) -> Result<ModelOutput, ProviderError>;
}

/// Routes models to provider adapters
///
/// Resolution priority:
/// 1. Explicit routing table (from config `[providers.routing]`)
/// 2. Model family auto-inference (gpt-* → OpenAI, gemini-* → Gemini)
/// 3. Configured default provider
pub struct ClientRegistry {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    /// Model name to provider index, from explicit configuration
    explicit_routing: HashMap<String, usize>,
    default_kind: Option<ProviderKind>,
}

impl ClientRegistry {
    pub fn new(
        providers: Vec<Arc<dyn ProviderAdapter>>,
        routing: &HashMap<String, String>,
        default_provider: Option<&str>,
    ) -> Self {
        let mut explicit_routing = HashMap::new();
        for (model_name, provider_name) in routing {
            let Some(target_kind) = ProviderKind::from_name(provider_name) else {
                debug!(provider = %provider_name, "Ignoring unknown provider in routing table");
                continue;
            };
            if let Some(idx) = providers.iter().position(|p| p.kind() == target_kind) {
                explicit_routing.insert(model_name.clone(), idx);
            }
        }

        Self {
            providers,
            explicit_routing,
            default_kind: default_provider.and_then(ProviderKind::from_name),
        }
    }

    fn resolve(&self, model: &Model) -> Option<&dyn ProviderAdapter> {
        // 1. Explicit routing table
        if let Some(&idx) = self.explicit_routing.get(model.as_str()) {
            return Some(self.providers[idx].as_ref());
        }

        // 2. Model family auto-inference
        let inferred = if model.is_gpt() {
            Some(ProviderKind::OpenAi)
        } else if model.is_gemini() {
            Some(ProviderKind::Gemini)
        } else {
            None
        };
        if let Some(kind) = inferred {
            if let Some(p) = self.providers.iter().find(|p| p.kind() == kind) {
                return Some(p.as_ref());
            }
        }

        // 3. Configured default provider
        if let Some(kind) = self.default_kind {
            if let Some(p) = self.providers.iter().find(|p| p.kind() == kind) {
                return Some(p.as_ref());
            }
        }

        None
    }
}

#[async_trait]
impl ModelClient for ClientRegistry {
    fn supports(&self, model: &Model) -> bool {
        self.resolve(model).is_some()
    }

    async fn query(
        &self,
        model: &Model,
        system_prompt: &str,
        prompt: &str,
        options: &QueryOptions,
    ) -> Result<ModelOutput, ProviderError> {
        let adapter = self.resolve(model).ok_or_else(|| {
            ProviderError::upstream(format!("no provider bound for {}", model)).with_retryable(false)
        })?;
        adapter.query(model, system_prompt, prompt, options).await
    }
}

/// Classify an HTTP error status into the provider-error taxonomy
pub(crate) fn error_from_status(status: reqwest::StatusCode, body: &str) -> ProviderError {
    let snippet: String = body.chars().take(200).collect();
    let message = format!("HTTP {}: {}", status.as_u16(), snippet);
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        ProviderError::auth(message)
    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        ProviderError::rate_limit(message)
    } else {
        ProviderError::upstream(message)
    }
}

/// Classify a transport-level failure
pub(crate) fn error_from_transport(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout(error.to_string())
    } else if error.is_decode() {
        ProviderError::malformed(error.to_string())
    } else {
        ProviderError::upstream(error.to_string())
    }
}

/// Build the registry from file configuration
pub fn build_registry(config: &FileConfig) -> ClientRegistry {
    let providers: Vec<Arc<dyn ProviderAdapter>> = vec![
        Arc::new(OpenAiClient::new(&config.providers.openai)),
        Arc::new(GeminiClient::new(&config.providers.gemini)),
    ];
    ClientRegistry::new(
        providers,
        &config.providers.routing,
        config.providers.default.as_deref(),
    )
}
