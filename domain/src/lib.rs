//! Domain layer for wall-bounce
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Wall-Bounce
//!
//! A query is passed through multiple independent model providers in
//! sequence. Each provider sees the accumulated outputs of the providers
//! before it, producing a chain of intermediate opinions that ends in a
//! cross-checked final answer.
//!
//! ## Step
//!
//! One provider's single contribution (success or failure) within a
//! collaboration request's history. Steps are append-only and ordered.

pub mod catalog;
pub mod collaboration;
pub mod core;
pub mod prompt;
pub mod synthesis;

// Re-export commonly used types
pub use catalog::ModelCatalog;
pub use collaboration::{
    request::{CollaborationRequest, RawRequest, SessionId, ValidationError},
    result::{CollaborationResult, ResultMetadata},
    step::{CollaborationStep, StepHistory},
};
pub use core::{model::Model, query::Query, task_type::TaskType};
pub use prompt::PromptTemplate;
pub use synthesis::{LastSuccessful, SynthesisStrategy, TOTAL_FAILURE_SENTINEL};
