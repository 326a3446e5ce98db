//! Configuration file structure (`wall-bounce.toml`)
//!
//! Each section lives in its own module and deserializes with
//! `#[serde(default)]` so a partial file always yields a usable config.

pub mod catalog;
pub mod collaboration;
pub mod limits;
pub mod providers;

pub use catalog::FileCatalogConfig;
pub use collaboration::FileCollaborationConfig;
pub use limits::FileLimitsConfig;
pub use providers::{FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Permitted model identifiers (`[catalog]`)
    pub catalog: FileCatalogConfig,
    /// Default chain and task type (`[collaboration]`)
    pub collaboration: FileCollaborationConfig,
    /// Timeouts and context budget (`[limits]`)
    pub limits: FileLimitsConfig,
    /// Provider endpoints and routing (`[providers]`)
    pub providers: FileProvidersConfig,
}
