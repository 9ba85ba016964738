//! # Reader State Storage Module
//!
//! ## Purpose
//! Persistent per-reader state: saved article ids (toggle semantics) and a
//! most-recent-first reading history with a fixed cap, kept in an embedded
//! database so the application works offline.
//!
//! ## Input/Output Specification
//! - **Input**: Article ids from the UI layers
//! - **Output**: Ordered id lists reflecting the reader's activity
//! - **Storage**: Sled embedded database, one tree per concern, bincode
//!   values

use crate::config::StorageConfig;
use crate::errors::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SAVED_KEY: &[u8] = b"saved_articles";
const HISTORY_KEY: &[u8] = b"reading_history";

/// One reading-history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub article_id: String,
    pub viewed_at: DateTime<Utc>,
}

/// Reader state manager over an embedded database
pub struct StorageManager {
    db: sled::Db,
    saved_tree: sled::Tree,
    history_tree: sled::Tree,
    history_limit: usize,
}

impl StorageManager {
    /// Open (or create) the database at the configured path
    pub async fn new(config: StorageConfig) -> Result<Self> {
        if let Some(parent) = config.db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db = sled::open(&config.db_path)?;
        let saved_tree = db.open_tree("saved_articles")?;
        let history_tree = db.open_tree("reading_history")?;

        tracing::info!("Reader storage opened at {:?}", config.db_path);

        Ok(Self {
            db,
            saved_tree,
            history_tree,
            history_limit: config.history_limit,
        })
    }

    /// Flush pending writes to disk
    pub async fn flush(&self) -> Result<()> {
        self.db.flush_async().await?;
        Ok(())
    }

    fn read_list<T: for<'de> Deserialize<'de>>(tree: &sled::Tree, key: &[u8]) -> Result<Vec<T>> {
        match tree.get(key)? {
            Some(bytes) => Ok(bincode::deserialize(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(tree: &sled::Tree, key: &[u8], list: &[T]) -> Result<()> {
        tree.insert(key, bincode::serialize(&list)?)?;
        Ok(())
    }

    /// Saved article ids in insertion order
    pub async fn get_saved_articles(&self) -> Result<Vec<String>> {
        Self::read_list(&self.saved_tree, SAVED_KEY)
    }

    /// Toggle an article in the saved list: remove it if present, append it
    /// otherwise. Returns the updated list.
    pub async fn toggle_saved(&self, article_id: &str) -> Result<Vec<String>> {
        let mut saved: Vec<String> = Self::read_list(&self.saved_tree, SAVED_KEY)?;
        match saved.iter().position(|id| id == article_id) {
            Some(index) => {
                saved.remove(index);
            }
            None => saved.push(article_id.to_string()),
        }
        Self::write_list(&self.saved_tree, SAVED_KEY, &saved)?;
        tracing::debug!("Saved list now holds {} articles", saved.len());
        Ok(saved)
    }

    /// Record a view: move the article to the front of the history,
    /// deduplicated, capped at the configured limit
    pub async fn add_to_history(&self, article_id: &str) -> Result<()> {
        let mut history: Vec<HistoryEntry> = Self::read_list(&self.history_tree, HISTORY_KEY)?;
        history.retain(|entry| entry.article_id != article_id);
        history.insert(
            0,
            HistoryEntry {
                article_id: article_id.to_string(),
                viewed_at: Utc::now(),
            },
        );
        history.truncate(self.history_limit);
        Self::write_list(&self.history_tree, HISTORY_KEY, &history)
    }

    /// Reading history, most recent first
    pub async fn get_history(&self) -> Result<Vec<HistoryEntry>> {
        Self::read_list(&self.history_tree, HISTORY_KEY)
    }
}
