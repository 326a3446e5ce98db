//! Model catalog - the configured set of permitted model identifiers
//!
//! The catalog is supplied by external configuration; the orchestrator
//! never hard-codes which identifiers are allowed. Requests naming a model
//! outside the catalog are rejected before any provider is contacted.

use crate::core::model::Model;

/// The set of model identifiers permitted for collaboration requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    models: Vec<Model>,
}

impl ModelCatalog {
    /// Create a catalog from the configured model list
    ///
    /// Duplicates are collapsed, preserving first-seen order.
    pub fn new(models: Vec<Model>) -> Self {
        let mut deduped: Vec<Model> = Vec::with_capacity(models.len());
        for model in models {
            if !deduped.contains(&model) {
                deduped.push(model);
            }
        }
        Self { models: deduped }
    }

    /// Catalog containing the built-in default identifiers
    pub fn builtin() -> Self {
        Self::new(vec![
            Model::Gpt5,
            Model::Gpt41,
            Model::O3Mini,
            Model::Gemini25Pro,
            Model::Gemini25Flash,
        ])
    }

    /// Check whether a model is permitted
    pub fn contains(&self, model: &Model) -> bool {
        self.models.contains(model)
    }

    /// All permitted models, in configuration order
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_defaults() {
        let catalog = ModelCatalog::builtin();
        for model in Model::default_models() {
            assert!(catalog.contains(&model));
        }
    }

    #[test]
    fn test_unknown_model_not_contained() {
        let catalog = ModelCatalog::builtin();
        assert!(!catalog.contains(&Model::Custom("made-up".to_string())));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let catalog = ModelCatalog::new(vec![Model::Gpt5, Model::Gpt5, Model::O3Mini]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.models()[0], Model::Gpt5);
    }

    #[test]
    fn test_custom_models_allowed_when_configured() {
        let catalog = ModelCatalog::new(vec![
            Model::Custom("local-llama".to_string()),
            Model::Gpt5,
        ]);
        assert!(catalog.contains(&Model::Custom("local-llama".to_string())));
    }
}
