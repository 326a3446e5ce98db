//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the env var in real deployments.
    pub api_key: Option<String>,
    /// Base URL (can be overridden for Azure OpenAI or local gateways).
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
    /// Cost estimate per 1000 tokens in USD (0.0 = unknown).
    pub cost_per_1k_tokens: f64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 8192,
            cost_per_1k_tokens: 0.0,
        }
    }
}

/// Google Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the env var in real deployments.
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
    /// Cost estimate per 1000 tokens in USD (0.0 = unknown).
    pub cost_per_1k_tokens: f64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_tokens: 8192,
            cost_per_1k_tokens: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "openai" or "gemini".
    pub default: Option<String>,
    /// OpenAI-compatible API settings.
    pub openai: FileOpenAiConfig,
    /// Google Gemini API settings.
    pub gemini: FileGeminiConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let config = FileProvidersConfig::default();
        assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.routing.is_empty());
        assert!(config.default.is_none());
    }

    #[test]
    fn test_routing_from_toml() {
        let config: super::super::FileConfig = toml::from_str(
            r#"
[providers]
default = "openai"

[providers.routing]
"local-llama" = "openai"

[providers.openai]
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(config.providers.default.as_deref(), Some("openai"));
        assert_eq!(
            config.providers.routing.get("local-llama").map(String::as_str),
            Some("openai")
        );
        assert_eq!(config.providers.openai.base_url, "http://localhost:8080");
        // Untouched sections keep defaults
        assert_eq!(config.providers.openai.max_tokens, 8192);
    }
}
