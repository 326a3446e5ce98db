//! Collaboration request and validation
//!
//! The request validator is the only gate between the transport layer and
//! the sequencer: a request that fails here causes zero provider calls.

use crate::catalog::ModelCatalog;
use crate::core::model::Model;
use crate::core::query::Query;
use crate::core::task_type::TaskType;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Errors produced by request validation
///
/// Surfaced to the caller before any provider is contacted; no side
/// effects have occurred when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("At least 2 distinct models are required, got {0}")]
    TooFewModels(usize),

    #[error("Model not in catalog: {0}")]
    UnknownModel(String),
}

/// Opaque session identifier (Value Object)
///
/// Caller-supplied or generated. Generated identifiers are unique within
/// the process lifetime: a UTC-millisecond timestamp plus a process-wide
/// counter suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh session id
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("session-{}-{}", millis, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        SessionId::new(s)
    }
}

/// A validated collaboration request (Entity)
///
/// Immutable once accepted. Construct via [`CollaborationRequest::validate`];
/// the unchecked raw form is [`RawRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationRequest {
    query: Query,
    task_type: TaskType,
    models: Vec<Model>,
    session_id: SessionId,
}

/// Unvalidated request as received from the transport layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRequest {
    pub query: String,
    #[serde(default)]
    pub task_type: TaskType,
    pub models: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl CollaborationRequest {
    /// Validate a raw request against the configured catalog
    ///
    /// Rejects empty queries, fewer than 2 distinct models, and any model
    /// outside the catalog. A missing session id is replaced by a generated
    /// one. Duplicate model entries are collapsed before the minimum-size
    /// check, so `["gpt-5", "gpt-5"]` counts as one model.
    pub fn validate(
        raw: RawRequest,
        catalog: &ModelCatalog,
    ) -> Result<CollaborationRequest, ValidationError> {
        let query = Query::try_new(raw.query).ok_or(ValidationError::EmptyQuery)?;

        let mut models: Vec<Model> = Vec::with_capacity(raw.models.len());
        for name in &raw.models {
            let model = Model::from(name.as_str());
            if !catalog.contains(&model) {
                return Err(ValidationError::UnknownModel(name.clone()));
            }
            if !models.contains(&model) {
                models.push(model);
            }
        }
        if models.len() < 2 {
            return Err(ValidationError::TooFewModels(models.len()));
        }

        let session_id = match raw.session_id {
            Some(id) if !id.trim().is_empty() => SessionId::new(id),
            _ => SessionId::generate(),
        };

        Ok(CollaborationRequest {
            query,
            task_type: raw.task_type,
            models,
            session_id,
        })
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// The requested models, distinct, in request order
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}
