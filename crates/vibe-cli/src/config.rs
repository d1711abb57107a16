//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use vibe_domain::seed::default_user;
use vibe_domain::User;
use vibe_enrich::EnricherConfig;
use vibe_llm::gemini::DEFAULT_MODEL;
use vibe_llm::GeminiProvider;

/// Environment variable consulted when the configured one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identity stamped on created entries
    #[serde(default = "default_user")]
    pub author: User,

    /// Where the catalog is kept
    #[serde(default)]
    pub storage: StorageConfig,

    /// AI enrichment settings
    #[serde(default)]
    pub enrichment: EnrichmentConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Data directory (defaults to `~/.vibe/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Durable slot implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `<data_dir>/vibe_entries.json`
    #[default]
    File,
    /// `<data_dir>/vibe.db`
    Sqlite,
}

/// Enrichment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Maximum time for one analysis (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum prompt length (characters)
    #[serde(default = "default_max_prompt_length")]
    pub max_prompt_length: usize,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(vibe_home()?.join("config.toml"))
    }

    /// Load configuration from `path`, writing the defaults there on first run.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }

        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(vibe_home()?.join("data")),
        }
    }
}

impl EnrichmentConfig {
    /// Environment variables to try for the API key, in order.
    pub fn api_key_vars(&self) -> Vec<&str> {
        let mut vars = vec![self.api_key_env.as_str()];
        if self.api_key_env != FALLBACK_API_KEY_ENV {
            vars.push(FALLBACK_API_KEY_ENV);
        }
        vars
    }

    /// Gemini provider for the configured model, endpoint, key and timeout.
    pub fn provider(&self) -> Result<GeminiProvider> {
        let mut provider = GeminiProvider::from_env(&self.api_key_vars(), &self.model)?
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(endpoint) = &self.endpoint {
            provider = provider.with_endpoint(endpoint);
        }
        Ok(provider)
    }

    /// Enricher limits, validated.
    pub fn enricher_config(&self) -> Result<EnricherConfig> {
        let config = EnricherConfig {
            max_prompt_length: self.max_prompt_length,
            timeout_secs: self.timeout_secs,
        };
        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: default_user(),
            storage: StorageConfig::default(),
            enrichment: EnrichmentConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            max_prompt_length: default_max_prompt_length(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn vibe_home() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".vibe"))
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    EnricherConfig::default().timeout_secs
}

fn default_max_prompt_length() -> usize {
    EnricherConfig::default().max_prompt_length
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vibe_domain::UserRole;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.author.name, "Alex Engineer");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.enrichment.model, "gemini-2.5-flash");
        assert_eq!(config.enrichment.timeout_secs, 30);
        assert!(config.settings.color);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [storage]
            backend = "sqlite"

            [author]
            id = "u9"
            name = "Robin Ops"
            avatar = ""
            role = "ADMIN"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.author.role, UserRole::Admin);
        assert_eq!(config.enrichment.max_prompt_length, 20_000);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_init(&path).unwrap();
        assert!(path.exists());

        let reloaded = Config::load_or_init(&path).unwrap();
        assert_eq!(reloaded.author, config.author);
        assert_eq!(reloaded.enrichment.api_key_env, "API_KEY");
    }

    #[test]
    fn test_api_key_vars() {
        let mut enrichment = EnrichmentConfig::default();
        assert_eq!(enrichment.api_key_vars(), vec!["API_KEY", "GEMINI_API_KEY"]);

        enrichment.api_key_env = "GEMINI_API_KEY".to_string();
        assert_eq!(enrichment.api_key_vars(), vec!["GEMINI_API_KEY"]);
    }

    #[test]
    fn test_invalid_enricher_limits() {
        let enrichment = EnrichmentConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(enrichment.enricher_config(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_provider_uses_configured_timeout() {
        let enrichment = EnrichmentConfig {
            timeout_secs: 120,
            endpoint: Some("http://127.0.0.1:9".to_string()),
            ..Default::default()
        };
        let provider = enrichment.provider().unwrap();
        assert_eq!(provider.timeout(), Duration::from_secs(120));
        assert_eq!(
            provider.timeout(),
            enrichment.enricher_config().unwrap().timeout()
        );
    }

    #[test]
    fn test_explicit_data_dir() {
        let mut config = Config::default();
        config.storage.data_dir = Some(PathBuf::from("/tmp/vibe-data"));
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/vibe-data"));
    }
}
