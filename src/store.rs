//! # Article Store Module
//!
//! ## Purpose
//! The authoritative, read-only collection of constitutional articles. Loaded
//! exactly once per engine from an `ArticleSource`; a failed or malformed
//! fetch degrades to an empty store with a logged diagnostic so callers see
//! "no results" rather than an error.
//!
//! ## Input/Output Specification
//! - **Input**: An article source (file, HTTP, in-memory)
//! - **Output**: Immutable article list plus precomputed scoring fields
//! - **Lifecycle**: Write-once, read-many; a fresh load replaces everything

use crate::score::ScoreFields;
use crate::sources::ArticleSource;
use crate::LegalArticle;
use std::collections::HashSet;

/// Read-only article collection with precomputed scoring fields
pub struct ArticleStore {
    articles: Vec<LegalArticle>,
    fields: Vec<ScoreFields>,
}

impl ArticleStore {
    /// An empty store, the state before a load or after a failed one
    pub fn empty() -> Self {
        Self {
            articles: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Build a store directly from an in-memory collection
    pub fn from_articles(articles: Vec<LegalArticle>) -> Self {
        let mut accepted = Vec::with_capacity(articles.len());
        let mut seen_ids: HashSet<String> = HashSet::new();

        for article in articles {
            if article.id.is_empty() || article.title.is_empty() || article.content.is_empty() {
                tracing::warn!("Skipping malformed article (id {:?})", article.id);
                continue;
            }
            if !seen_ids.insert(article.id.clone()) {
                tracing::warn!("Skipping duplicate article id {:?}", article.id);
                continue;
            }
            accepted.push(article);
        }

        let fields = accepted.iter().map(ScoreFields::from_article).collect();
        Self {
            articles: accepted,
            fields,
        }
    }

    /// Fetch the whole collection from a source, recovering to an empty store
    /// on any failure
    pub async fn load(source: &dyn ArticleSource) -> Self {
        match source.fetch_articles().await {
            Ok(articles) => {
                let store = Self::from_articles(articles);
                tracing::info!(
                    "Loaded {} articles from source '{}'",
                    store.len(),
                    source.name()
                );
                store
            }
            Err(e) => {
                tracing::warn!(
                    "Article load from '{}' failed ({}): continuing with an empty store",
                    source.name(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// The full current collection; callers must not rely on mutating it
    pub fn get_all(&self) -> &[LegalArticle] {
        &self.articles
    }

    pub fn get(&self, position: usize) -> Option<&LegalArticle> {
        self.articles.get(position)
    }

    /// Precomputed lowercase scoring fields, parallel to `get_all()`
    pub fn score_fields(&self) -> &[ScoreFields] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
