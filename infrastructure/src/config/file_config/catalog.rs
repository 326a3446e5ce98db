//! Model catalog configuration from TOML (`[catalog]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [catalog]
//! models = ["gpt-5", "gemini-2.5-pro", "o3-mini", "gpt-4.1"]
//! ```

use bounce_domain::{Model, ModelCatalog};
use serde::{Deserialize, Serialize};

/// Permitted model identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Identifiers requests may name; anything else is rejected at
    /// validation time
    pub models: Vec<String>,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            models: ModelCatalog::builtin()
                .models()
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl FileCatalogConfig {
    /// Build the domain catalog from the configured identifiers
    pub fn to_catalog(&self) -> ModelCatalog {
        let models: Vec<Model> = self.models.iter().map(|s| Model::from(s.as_str())).collect();
        ModelCatalog::new(models)
    }
}
