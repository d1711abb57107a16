//! Configuration for the Enricher

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Enricher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnricherConfig {
    /// Maximum prompt length (characters)
    pub max_prompt_length: usize,

    /// Maximum time for a single analysis call (seconds)
    pub timeout_secs: u64,
}

impl EnricherConfig {
    /// Get the analysis timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_prompt_length == 0 {
            return Err("max_prompt_length must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: 20_000,
            timeout_secs: 30,
        }
    }
}
