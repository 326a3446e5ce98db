//! Google Gemini adapter (Generative Language API)

use super::{error_from_status, error_from_transport, ProviderAdapter, ProviderKind};
use crate::config::file_config::FileGeminiConfig;
use async_trait::async_trait;
use bounce_application::{ModelOutput, ProviderError, QueryOptions};
use bounce_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_tokens: u32,
    cost_per_1k_tokens: f64,
}

impl GeminiClient {
    pub fn new(config: &FileGeminiConfig) -> Self {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(&config.api_key_env).ok());
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            max_tokens: config.max_tokens,
            cost_per_1k_tokens: config.cost_per_1k_tokens,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    total_token_count: u64,
}

#[async_trait]
impl ProviderAdapter for GeminiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn query(
        &self,
        model: &Model,
        system_prompt: &str,
        prompt: &str,
        options: &QueryOptions,
    ) -> Result<ModelOutput, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::auth("no API key configured"))?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: system_prompt,
                }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: self.max_tokens,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        );
        debug!(model = %model, session = %options.session_id, "Gemini generateContent request");

        let started = Instant::now();
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .timeout(options.timeout)
            .json(&body)
            .send()
            .await
            .map_err(error_from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &body));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(e.to_string()))?;
        let latency_ms = started.elapsed().as_millis() as u64;

        let text: String = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ProviderError::malformed("response contained no candidates"));
        }

        let tokens_used = parsed
            .usage_metadata
            .map(|u| u.total_token_count)
            .unwrap_or(0);
        Ok(ModelOutput {
            text,
            tokens_used,
            cost_estimate: tokens_used as f64 / 1000.0 * self.cost_per_1k_tokens,
            latency_ms,
        })
    }
}
