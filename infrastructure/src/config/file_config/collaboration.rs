//! Collaboration defaults from TOML (`[collaboration]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [collaboration]
//! models = ["gpt-5", "gemini-2.5-pro", "o3-mini"]
//! task_type = "analysis"
//! ```

use bounce_domain::{Model, TaskType};
use serde::{Deserialize, Serialize};

/// Default chain used when the caller does not name models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCollaborationConfig {
    /// Default ordered model chain
    pub models: Vec<String>,
    /// Default task type: "general", "coding", "analysis", "architecture"
    pub task_type: String,
}

impl Default for FileCollaborationConfig {
    fn default() -> Self {
        Self {
            models: Model::default_models()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            task_type: TaskType::General.as_str().to_string(),
        }
    }
}

impl FileCollaborationConfig {
    pub fn parse_models(&self) -> Vec<Model> {
        self.models.iter().map(|s| Model::from(s.as_str())).collect()
    }

    pub fn parse_task_type(&self) -> TaskType {
        self.task_type.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain() {
        let config = FileCollaborationConfig::default();
        assert_eq!(config.parse_models(), Model::default_models());
        assert_eq!(config.parse_task_type(), TaskType::General);
    }

    #[test]
    fn test_unknown_task_type_falls_back_to_general() {
        let config = FileCollaborationConfig {
            task_type: "haiku".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_task_type(), TaskType::General);
    }
}
