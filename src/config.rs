//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration for the search engine, loaded from a TOML file
//! with environment-variable overrides and validation, falling back to
//! defaults when no file is present.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! The ranking weights and normalizer thresholds carry the tuning values of
//! the original product as defaults. They are configuration rather than
//! constants so they can be retuned against a larger corpus without code
//! changes.

use crate::errors::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data file locations
    pub data: DataConfig,
    /// Search facade behavior
    pub search: SearchConfig,
    /// Relevance scoring weights
    pub ranking: RankingConfig,
    /// Query normalizer thresholds
    pub normalizer: NormalizerConfig,
    /// Reader state storage
    pub storage: StorageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Data file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the constitutional article collection (JSON)
    pub articles_path: PathBuf,
    /// Path to the judicial case collection (JSON)
    pub cases_path: PathBuf,
}

/// Search facade behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of fused results returned to callers
    pub max_results: usize,
    /// Cap on candidates taken from the inverted-index leg before fusion
    pub index_candidates: usize,
}

/// Relevance scoring weights, applied per query token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Bonus for a whole-word match anywhere in the composite text
    pub whole_word: u32,
    /// Bonus for a substring match in the title specifically
    pub title: u32,
    /// Bonus for a tag equal to the token (case-insensitive)
    pub exact_tag: u32,
    /// Bonus for a plain substring match anywhere in the composite text
    pub substring: u32,
}

/// Query normalizer thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Minimum word length kept after tokenization
    pub min_word_len: usize,
    /// Strip a trailing "ing" only from words longer than this
    pub ing_suffix_min_len: usize,
    /// Rewrite a trailing "ies" to "y" only for words longer than this
    pub ies_suffix_min_len: usize,
    /// Strip a trailing "s" only from words longer than this
    pub plural_suffix_min_len: usize,
}

/// Reader state storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Embedded database path
    pub db_path: PathBuf,
    /// Maximum reading-history entries retained
    pub history_limit: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            articles_path: PathBuf::from("data/constitution.json"),
            cases_path: PathBuf::from("data/cases.json"),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            index_candidates: 5,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            whole_word: 3,
            title: 5,
            exact_tag: 10,
            substring: 1,
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_word_len: 3,
            ing_suffix_min_len: 5,
            ies_suffix_min_len: 4,
            plural_suffix_min_len: 3,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("data/cedizen-db"),
            history_limit: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|e| SearchError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| SearchError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(path) = std::env::var("CEDIZEN_ARTICLES_PATH") {
            self.data.articles_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("CEDIZEN_CASES_PATH") {
            self.data.cases_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("CEDIZEN_DB_PATH") {
            self.storage.db_path = PathBuf::from(path);
        }
        if let Ok(level) = std::env::var("CEDIZEN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(max) = std::env::var("CEDIZEN_MAX_RESULTS") {
            self.search.max_results = max.parse().map_err(|_| SearchError::Config {
                message: "Invalid number in CEDIZEN_MAX_RESULTS".to_string(),
            })?;
        }
        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(SearchError::ValidationFailed {
                field: "search.max_results".to_string(),
                reason: "Result limit cannot be zero".to_string(),
            });
        }

        if self.normalizer.min_word_len == 0 {
            return Err(SearchError::ValidationFailed {
                field: "normalizer.min_word_len".to_string(),
                reason: "Minimum word length cannot be zero".to_string(),
            });
        }

        let w = &self.ranking;
        if w.whole_word == 0 && w.title == 0 && w.exact_tag == 0 && w.substring == 0 {
            return Err(SearchError::ValidationFailed {
                field: "ranking".to_string(),
                reason: "At least one scoring weight must be non-zero".to_string(),
            });
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(SearchError::ValidationFailed {
                field: "logging.level".to_string(),
                reason: format!("Invalid log level: {}", self.logging.level),
            });
        }

        Ok(())
    }
}
