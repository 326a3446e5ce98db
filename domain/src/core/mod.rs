//! Core value objects shared across the domain

pub mod model;
pub mod query;
pub mod task_type;
