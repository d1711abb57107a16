//! Vibe CLI - Command-line interface for the vibe prompt catalog.

use anyhow::Context;
use clap::Parser;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vibe_cli::cli::CreateArgs;
use vibe_cli::commands;
use vibe_cli::config::StorageBackend;
use vibe_cli::{Cli, Command, Config, Formatter};
use vibe_enrich::Enricher;
use vibe_store::{FileSlot, SqliteSlot};

#[tokio::main]
async fn main() {
    // Log to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_or_init(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let enrichment = &config.enrichment;
    let provider = enrichment.provider()?;
    if needs_enrichment(cli.command.as_ref()) && !provider.has_credential() {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "No API key in {}; AI enrichment is unavailable",
                enrichment.api_key_vars().join(" or ")
            ))
        );
    }
    let enricher = Enricher::new(provider, enrichment.enricher_config()?);

    let data_dir = config.data_dir()?;
    debug!(
        "Storage backend {:?} at {}, model {}",
        config.storage.backend,
        data_dir.display(),
        enrichment.model
    );
    match config.storage.backend {
        StorageBackend::File => {
            let slot = FileSlot::new(&data_dir)
                .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;
            commands::execute(cli.command, slot, enricher, &config, &formatter).await?;
        }
        StorageBackend::Sqlite => {
            fs::create_dir_all(&data_dir)?;
            let db_path = data_dir.join("vibe.db");
            let slot = SqliteSlot::new(&db_path)
                .with_context(|| format!("Failed to open database {}", db_path.display()))?;
            commands::execute(cli.command, slot, enricher, &config, &formatter).await?;
        }
    }

    Ok(())
}

fn needs_enrichment(command: Option<&Command>) -> bool {
    matches!(
        command,
        Some(Command::Enrich(_)) | Some(Command::Create(CreateArgs { enrich: true, .. }))
    )
}
