//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the article search engine, providing the
//! error types and conversion utilities shared by all components.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from various system components
//! - **Output**: Structured error types with context
//! - **Error Categories**: Source, Parsing, Configuration, Storage
//!
//! Search itself never surfaces these to callers: a failed data fetch
//! degrades to an empty store and a logged diagnostic. The types below cover
//! the construction-time surfaces that can legitimately fail (config loading,
//! storage open, source implementations internally).

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error types for the article search engine
#[derive(Debug, Error)]
pub enum SearchError {
    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data source unavailable
    #[error("Data source '{origin}' is unavailable: {details}")]
    DataSourceUnavailable { origin: String, details: String },

    /// Data parsing errors
    #[error("Failed to parse data from {origin}: {details}")]
    DataParsing { origin: String, details: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Binary serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SearchError {
    /// Check if the error is recoverable by degrading to an empty collection
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SearchError::DataSourceUnavailable { .. }
                | SearchError::DataParsing { .. }
                | SearchError::Http(_)
                | SearchError::Json(_)
                | SearchError::Io(_)
        )
    }

    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            SearchError::Config { .. } | SearchError::Toml(_) => "configuration",
            SearchError::DataSourceUnavailable { .. }
            | SearchError::DataParsing { .. }
            | SearchError::Http(_)
            | SearchError::Json(_) => "source",
            SearchError::Database(_) | SearchError::Serialization(_) => "storage",
            SearchError::Io(_) => "io",
            SearchError::Internal { .. } | SearchError::ValidationFailed { .. } => "generic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_are_recoverable() {
        let err = SearchError::DataSourceUnavailable {
            origin: "file:data/constitution.json".to_string(),
            details: "no such file".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.category(), "source");
    }

    #[test]
    fn config_errors_are_not_recoverable() {
        let err = SearchError::Config {
            message: "bad weights".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.category(), "configuration");
    }
}
