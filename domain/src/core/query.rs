//! Query value object

use serde::{Deserialize, Serialize};

/// The text a collaboration request bounces through the model chain
///
/// Construction goes through [`Query::try_new`], so a held value is never
/// empty or whitespace-only. The original text is preserved verbatim; it
/// is echoed back on the result and embedded in every bounce prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Create a query, rejecting empty or whitespace-only content
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
