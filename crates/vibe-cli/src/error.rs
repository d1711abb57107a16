//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog operation failed
    #[error(transparent)]
    Catalog(#[from] vibe_catalog::CatalogError),

    /// Storage could not be opened
    #[error("Storage error: {0}")]
    Store(#[from] vibe_store::StoreError),

    /// LLM provider could not be set up
    #[error("LLM error: {0}")]
    Llm(#[from] vibe_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No entry with this id
    #[error("Entry not found: {0}")]
    NotFound(String),
}
