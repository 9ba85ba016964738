//! # Article Sources Module
//!
//! ## Purpose
//! Defines the common interface for article collection sources and provides
//! implementations for bundled files, remote HTTP collections and in-memory
//! fixtures.
//!
//! ## Input/Output Specification
//! - **Input**: A location (path, URL, or in-memory data)
//! - **Output**: The whole article collection in a single read
//! - **Failure**: A source error is recoverable — the store degrades to empty
//!
//! ## Architecture
//! - `ArticleSource` trait: common interface for all sources
//! - `file.rs`: bundled JSON collection on disk
//! - `http.rs`: remote JSON collection over HTTP
//! - `StaticSource`: in-memory collection for tests and demos

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::errors::Result;
use crate::LegalArticle;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for article collection sources
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Short name identifying this source in diagnostics
    fn name(&self) -> &str;

    /// Fetch the whole collection in one read
    async fn fetch_articles(&self) -> Result<Vec<LegalArticle>>;
}

/// In-memory source for tests and demos; counts fetches so single-load
/// initialization can be asserted
pub struct StaticSource {
    articles: Vec<LegalArticle>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(articles: Vec<LegalArticle>) -> Self {
        Self {
            articles,
            fetches: AtomicUsize::new(0),
        }
    }

    /// How many times the collection has been fetched
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_articles(&self) -> Result<Vec<LegalArticle>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.articles.clone())
    }
}
