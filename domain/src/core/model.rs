//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// This is a domain concept representing the different AI models that can
/// participate in a wall-bounce chain. Which identifiers are actually
/// permitted for a given deployment is decided by the configured
/// [`ModelCatalog`](crate::catalog::ModelCatalog), not by this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // GPT models
    Gpt5,
    Gpt41,
    O3Mini,
    // Gemini models
    Gemini25Pro,
    Gemini25Flash,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt5 => "gpt-5",
            Model::Gpt41 => "gpt-4.1",
            Model::O3Mini => "o3-mini",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Custom(s) => s,
        }
    }

    /// Get the default chain of models for a wall-bounce run
    pub fn default_models() -> Vec<Model> {
        vec![Model::Gpt5, Model::Gemini25Pro, Model::O3Mini]
    }

    /// Check if this is a GPT-family model
    pub fn is_gpt(&self) -> bool {
        matches!(self, Model::Gpt5 | Model::Gpt41 | Model::O3Mini)
    }

    /// Check if this is a Gemini-family model
    pub fn is_gemini(&self) -> bool {
        matches!(self, Model::Gemini25Pro | Model::Gemini25Flash)
    }
}

impl Default for Model {
    /// Returns the default model (GPT-5)
    fn default() -> Self {
        Model::Gpt5
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "gpt-5" => Model::Gpt5,
            "gpt-4.1" => Model::Gpt41,
            "o3-mini" => Model::O3Mini,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
