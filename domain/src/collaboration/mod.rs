//! Collaboration domain - requests, step history, and results
//!
//! A [`CollaborationRequest`](request::CollaborationRequest) is validated
//! once, consumed by the sequencer, and never retained. The sequencer
//! appends one [`CollaborationStep`](step::CollaborationStep) per requested
//! model to an exclusively-owned [`StepHistory`](step::StepHistory), and the
//! aggregator turns the completed history into a
//! [`CollaborationResult`](result::CollaborationResult).

pub mod request;
pub mod result;
pub mod step;
