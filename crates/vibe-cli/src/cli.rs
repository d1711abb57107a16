//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vibe - Browse, search and contribute to the prompt catalog.
#[derive(Debug, Parser)]
#[command(name = "vibe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VIBE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog entries, most recent first (default)
    List(ListArgs),

    /// Show one entry in full
    Show(ShowArgs),

    /// Create a new entry
    Create(CreateArgs),

    /// Search entries by title, tag or author
    Search(SearchArgs),

    /// Ask the AI for suggested metadata without saving anything
    Enrich(EnrichArgs),

    /// Write the seed catalog to storage
    Seed(SeedArgs),
}

/// Arguments for the list command.
#[derive(Debug, Default, Parser)]
pub struct ListArgs {
    /// Maximum number of entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Entry ID
    pub id: String,
}

/// Arguments for the create command.
#[derive(Debug, Default, Parser)]
pub struct CreateArgs {
    /// Entry title (may be suggested by --enrich)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Prompt text
    #[arg(short, long, conflicts_with = "file")]
    pub prompt: Option<String>,

    /// Read the prompt text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Short description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Tags (repeat or comma-separate)
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Link to the builder session
    #[arg(long)]
    pub builder_url: Option<String>,

    /// Link to the deployed result
    #[arg(long)]
    pub deployed_url: Option<String>,

    /// Pre-fill title, description and tags from an AI analysis
    #[arg(short, long)]
    pub enrich: bool,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query text (empty matches everything)
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the enrich command.
#[derive(Debug, Parser)]
pub struct EnrichArgs {
    /// Prompt text to analyze
    #[arg(conflicts_with = "file")]
    pub prompt: Option<String>,

    /// Read the prompt text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the seed command.
#[derive(Debug, Parser)]
pub struct SeedArgs {
    /// Overwrite a catalog that is already saved
    #[arg(long)]
    pub force: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
