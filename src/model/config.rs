//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::section::StyleFamily;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub writer: WriterConfig,
}

/// Line classification limits
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParserConfig {
    /// Lines longer than this (in characters) are never classified
    pub max_line_length: usize,
}

/// Document storage limits
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Documents larger than this (in bytes) are refused on read
    pub max_file_size: u64,
}

/// History log configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryConfig {
    pub max_entries: usize,
}

/// Section writer configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WriterConfig {
    /// Heading style used when a document has no headings at all
    #[serde(default)]
    pub default_style: StyleFamily,
    #[serde(default = "default_attribution_prefix")]
    pub attribution_prefix: String,
}

fn default_attribution_prefix() -> String {
    "Added".to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_line_length: 1000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            max_file_size: 1024 * 1024,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig { max_entries: 50 }
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            default_style: StyleFamily::default(),
            attribution_prefix: default_attribution_prefix(),
        }
    }
}

impl Config {
    /// Get the rcsect configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("rcsect")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the history directory path
    pub fn history_dir() -> PathBuf {
        Self::config_dir().join("history")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
