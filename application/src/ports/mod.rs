//! Ports - interfaces implemented by outer layers

pub mod model_client;
pub mod progress;
