//! OpenAI-compatible chat completions adapter
//!
//! Works against api.openai.com and any endpoint speaking the same
//! protocol (Azure OpenAI, local gateways) via `base_url`.

use super::{error_from_status, error_from_transport, ProviderAdapter, ProviderKind};
use crate::config::file_config::FileOpenAiConfig;
use async_trait::async_trait;
use bounce_application::{ModelOutput, ProviderError, QueryOptions};
use bounce_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_tokens: u32,
    cost_per_1k_tokens: f64,
}

impl OpenAiClient {
    pub fn new(config: &FileOpenAiConfig) -> Self {
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
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_completion_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    #[serde(default)]
    total_tokens: u64,
}

#[async_trait]
impl ProviderAdapter for OpenAiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
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

        let body = ChatRequest {
            model: model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_completion_tokens: self.max_tokens,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(model = %model, session = %options.session_id, "OpenAI chat completion request");

        let started = Instant::now();
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
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

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(e.to_string()))?;
        let latency_ms = started.elapsed().as_millis() as u64;

        let text = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProviderError::malformed("response contained no message content"))?;

        let tokens_used = parsed.usage.map(|u| u.total_tokens).unwrap_or(0);
        Ok(ModelOutput {
            text,
            tokens_used,
            cost_estimate: tokens_used as f64 / 1000.0 * self.cost_per_1k_tokens,
            latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = FileOpenAiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let client = OpenAiClient::new(&config);
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_direct_api_key_preferred() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "WALL_BOUNCE_TEST_MISSING_VAR".to_string(),
            ..Default::default()
        };
        let client = OpenAiClient::new(&config);
        assert_eq!(client.api_key.as_deref(), Some("sk-direct"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_auth_error() {
        let config = FileOpenAiConfig {
            api_key: None,
            api_key_env: "WALL_BOUNCE_TEST_MISSING_VAR".to_string(),
            ..Default::default()
        };
        let client = OpenAiClient::new(&config);
        let options = QueryOptions {
            timeout: std::time::Duration::from_secs(1),
            session_id: bounce_domain::SessionId::new("s"),
        };
        let err = client
            .query(&Model::Gpt5, "sys", "prompt", &options)
            .await
            .unwrap_err();
        assert_eq!(
            err.kind,
            bounce_application::ProviderErrorKind::Auth
        );
    }

    #[test]
    fn test_chat_response_parsing() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "hello"}}],
            "usage": {"prompt_tokens": 4, "completion_tokens": 2, "total_tokens": 6}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
        assert_eq!(parsed.usage.unwrap().total_tokens, 6);
    }
}
