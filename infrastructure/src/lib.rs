//! Infrastructure layer for wall-bounce
//!
//! Adapters that implement the application-layer ports: TOML/figment
//! configuration loading and HTTP provider clients behind the
//! model-routing registry.

pub mod config;
pub mod providers;

pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use providers::{build_registry, ClientRegistry, ProviderAdapter, ProviderKind};
