//! Application layer for wall-bounce
//!
//! Use cases and ports. The sequencer drives the wall-bounce chain through
//! the [`ModelClient`](ports::model_client::ModelClient) port; the
//! [`CollaborationService`](service::CollaborationService) is the public
//! entry point gluing validation, sequencing, and aggregation together.

pub mod config;
pub mod ports;
pub mod service;
pub mod use_cases;

pub use config::ExecutionLimits;
pub use ports::model_client::{
    ModelClient, ModelOutput, ProviderError, ProviderErrorKind, QueryOptions,
};
pub use ports::progress::{NoProgress, ProgressNotifier, SequencePhase};
pub use service::{CollaborationError, CollaborationService, SystemError};
pub use use_cases::aggregate::ResultAggregator;
pub use use_cases::run_wall_bounce::WallBounceSequencer;
