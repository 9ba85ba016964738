//! # Cedizen Legal Article Search Engine
//!
//! ## Overview
//! This library implements the search core of a civic-education application:
//! full-text search over a bundled collection of constitutional articles,
//! combining an inverted-index lookup with keyword scoring, synonym expansion
//! and lightweight stemming.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `sources`: Data sources for the article collection (file, HTTP, in-memory)
//! - `store`: Read-only article store loaded once per engine
//! - `index`: Token-based inverted index for broad-recall lookup
//! - `normalize`: Query normalization, stop words, stemming and synonyms
//! - `score`: Keyword relevance scoring with field-weighted bonuses
//! - `engine`: Search facade fusing index hits and scored hits
//! - `cases`: Judicial case summaries with plain substring search
//! - `storage`: Persistent reader state (saved articles, reading history)
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Article collections (JSON), search queries (text)
//! - **Output**: Ranked article lists, bounded and deduplicated
//! - **Behavior**: Deterministic results; every failure degrades to fewer or
//!   no results rather than an error
//!
//! ## Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use cedizen_search::{Config, SearchEngine};
//! use cedizen_search::sources::FileSource;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Arc::new(Config::default());
//!     let source = FileSource::new(&config.data.articles_path);
//!     let engine = SearchEngine::new(config, Box::new(source));
//!     let results = engine.search("freedom of assembly").await;
//!     println!("Found {} results", results.len());
//! }
//! ```

// Core modules
pub mod config;
pub mod errors;
pub mod sources;
pub mod store;
pub mod index;
pub mod normalize;
pub mod score;
pub mod engine;
pub mod cases;
pub mod storage;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use engine::SearchEngine;
pub use errors::{Result, SearchError};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single constitutional article, the unit indexed and returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalArticle {
    /// Stable unique identifier
    pub id: String,
    /// Human-facing article number/label (not necessarily numeric)
    pub article: String,
    /// Short heading, the highest-weighted search field
    pub title: String,
    /// Full legal text
    pub content: String,
    /// Optional plain-language paraphrase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified: Option<String>,
    /// Topical keywords; order is preserved for display, matching is
    /// case-insensitive
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub engine: Arc<engine::SearchEngine>,
    pub storage: Arc<storage::StorageManager>,
}
