//! Configuration - TOML file structures and the figment-based loader

pub mod file_config;
pub mod loader;

pub use file_config::FileConfig;
pub use loader::{ConfigError, ConfigLoader};
