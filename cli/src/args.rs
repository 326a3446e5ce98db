//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for collaboration results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript with every step
    Full,
    /// Only the final verified response
    Final,
    /// JSON output
    Json,
}

/// CLI arguments for wall-bounce
#[derive(Parser, Debug)]
#[command(name = "wall-bounce")]
#[command(author, version, about = "Wall-Bounce - a query cross-checked through a chain of LLMs")]
#[command(long_about = r#"
Wall-Bounce passes a query through several independent LLM providers in
sequence. Each model sees the accumulated outputs of the models before it
and produces its own verified opinion; the last successful output is
promoted as the final answer.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./wall-bounce.toml    Project-level config
3. ~/.config/wall-bounce/config.toml   Global config

Example:
  wall-bounce "Azure Oracle query speed analysis"
  wall-bounce -m gpt-5 -m gemini-2.5-pro -m o3-mini -t analysis "Compare index strategies"
"#)]
pub struct Cli {
    /// The query to bounce through the model chain
    pub query: String,

    /// Models in chain order (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Task type: general, coding, analysis, architecture
    #[arg(short = 't', long, value_name = "TYPE")]
    pub task_type: Option<String>,

    /// Session identifier (generated when omitted)
    #[arg(long, value_name = "ID")]
    pub session: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "final")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
