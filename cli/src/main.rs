//! CLI entrypoint for wall-bounce
//!
//! Wires the layers together with dependency injection: configuration is
//! loaded, the provider registry is built from it, and the collaboration
//! service runs the request to completion.

mod args;
mod output;
mod progress;

use anyhow::Result;
use args::{Cli, OutputFormat};
use bounce_application::{CollaborationService, NoProgress, ProgressNotifier};
use bounce_domain::RawRequest;
use bounce_infrastructure::{build_registry, ConfigLoader};
use clap::Parser;
use output::ConsoleFormatter;
use progress::ProgressReporter;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting wall-bounce");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Model chain: CLI flags override the configured default chain
    let models: Vec<String> = if cli.model.is_empty() {
        config.collaboration.models.clone()
    } else {
        cli.model.clone()
    };
    let task_type = match &cli.task_type {
        Some(s) => s
            .parse()
            .map_err(|e: String| anyhow::anyhow!("Invalid task type: {}", e))?,
        None => config.collaboration.parse_task_type(),
    };

    // === Dependency Injection ===
    let registry = Arc::new(build_registry(&config));
    let service = CollaborationService::new(registry, config.catalog.to_catalog())
        .with_limits(config.limits.to_limits());

    let request = RawRequest {
        query: cli.query.clone(),
        task_type,
        models,
        session_id: cli.session.clone(),
    };

    let reporter = ProgressReporter::new();
    let progress: &dyn ProgressNotifier = if cli.quiet { &NoProgress } else { &reporter };

    let result = service
        .process_with_progress(request, Default::default(), progress)
        .await?;

    let rendered = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Final => ConsoleFormatter::format_final_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", rendered);

    Ok(())
}
