use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modelfetch_core::{
    benchmark, list_sources, load_config, report, validate_config, Config, DownloadOrchestrator,
    DownloadTask, HubClient, SanitizedConfig,
};

/// Downloads and lists the quantized models used by the battery benchmark.
#[derive(Debug, Parser)]
#[command(name = "modelfetch", version)]
struct Cli {
    /// Directory the `models/` tree is created under (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Download every benchmark model that is not already on disk (default)
    Download,
    /// List the model files available in each benchmark repository
    List,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr; stdout carries the progress text
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = load_config().context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    info!(config = ?SanitizedConfig::from(&config), "Configuration loaded");

    let mut out = io::stdout();
    match cli.command.unwrap_or(Command::Download) {
        Command::Download => download(&config, cli.root.as_deref(), &mut out).await,
        Command::List => list(&config, &mut out).await,
    }
}

async fn download<W: Write>(config: &Config, root: Option<&Path>, out: &mut W) -> Result<()> {
    let tasks: Vec<DownloadTask> = match root {
        Some(root) => benchmark::benchmark_tasks()
            .iter()
            .map(|t| t.rooted_at(root))
            .collect(),
        None => benchmark::benchmark_tasks(),
    };

    let hub = HubClient::new(config.hub.clone()).context("Failed to create hub client")?;
    let orchestrator = DownloadOrchestrator::new(Arc::new(hub));

    report::write_banner(out, benchmark::TITLE, tasks.len(), benchmark::MODEL_FAMILY)?;
    let summary = orchestrator.run(&tasks, out).await?;
    report::write_summary(out, &summary, benchmark::NEXT_STEPS)?;
    out.flush()?;

    Ok(())
}

async fn list<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let hub = HubClient::new(config.hub.clone()).context("Failed to create hub client")?;
    let sources = benchmark::benchmark_sources();

    list_sources(&hub, &sources, &config.listing.suffix, out).await?;
    out.flush()?;

    Ok(())
}
