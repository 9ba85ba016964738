//! # Search Facade Module
//!
//! ## Purpose
//! The externally callable search entry point. Owns the article store, the
//! inverted index, the query normalizer and the relevance scorer; fuses the
//! two retrieval legs into one bounded, deduplicated, ordered result list.
//!
//! ## Input/Output Specification
//! - **Input**: Arbitrary query strings, including empty or whitespace-only
//! - **Output**: Up to `max_results` articles, index-confidence first, then
//!   keyword-score order; no duplicates; deterministic
//! - **Failure**: None surfaces to callers — a failed load means an empty
//!   store and empty results
//!
//! ## Lifecycle
//! Two states: uninitialized and ready, with a single one-way transition on
//! the first search or an explicit `init()`. Concurrent callers before the
//! store is ready all await the same in-flight load; exactly one fetch and
//! one index build ever happen per engine.

use crate::config::Config;
use crate::index::{InvertedIndex, TextIndex};
use crate::normalize::QueryNormalizer;
use crate::score::RelevanceScorer;
use crate::sources::ArticleSource;
use crate::store::ArticleStore;
use crate::utils::Timer;
use crate::LegalArticle;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Document store and index, built together once per engine
struct ReadyState {
    store: ArticleStore,
    index: InvertedIndex,
}

/// Main search engine handle. Construct one per process (or one per test);
/// there is no ambient global state.
pub struct SearchEngine {
    config: Arc<Config>,
    source: Box<dyn ArticleSource>,
    normalizer: QueryNormalizer,
    scorer: RelevanceScorer,
    ready: OnceCell<ReadyState>,
}

impl SearchEngine {
    /// Create an engine over a source. Construction is cheap: nothing is
    /// fetched until the first search or an explicit `init()`.
    pub fn new(config: Arc<Config>, source: Box<dyn ArticleSource>) -> Self {
        let normalizer = QueryNormalizer::new(config.normalizer.clone());
        let scorer = RelevanceScorer::new(config.ranking.clone());
        Self {
            config,
            source,
            normalizer,
            scorer,
            ready: OnceCell::new(),
        }
    }

    /// Load the store and build the index, memoized across concurrent callers
    async fn ready(&self) -> &ReadyState {
        self.ready
            .get_or_init(|| async {
                let timer = Timer::new("engine_init");
                let store = ArticleStore::load(self.source.as_ref()).await;
                let mut index = InvertedIndex::new();
                index.build(store.get_all());
                tracing::info!(
                    "Search engine ready: {} articles indexed in {}ms",
                    store.len(),
                    timer.elapsed_ms()
                );
                ReadyState { store, index }
            })
            .await
    }

    /// Explicit initialization; idempotent, returns the article count
    pub async fn init(&self) -> usize {
        self.ready().await.store.len()
    }

    /// Search the article collection. Returns up to `max_results` articles:
    /// inverted-index candidates first (broad recall over the raw lowercased
    /// query), then keyword-scored candidates (expanded token set), fused and
    /// deduplicated by article id.
    pub async fn search(&self, query: &str) -> Vec<LegalArticle> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let state = self.ready().await;
        if state.store.is_empty() {
            return Vec::new();
        }

        let timer = Timer::new("search");

        let index_candidates = state
            .index
            .query(&trimmed.to_lowercase(), self.config.search.index_candidates);

        let tokens = self.normalizer.expand(trimmed);
        let scored_candidates = self.scorer.rank(&tokens, state.store.score_fields());

        let results = self.fuse(state, index_candidates, scored_candidates);

        tracing::debug!(
            "Search '{}' -> {} results ({} tokens) in {}ms",
            trimmed,
            results.len(),
            tokens.len(),
            timer.elapsed_ms()
        );
        results
    }

    /// Concatenate the index leg and the scored leg, keep the first
    /// occurrence per article id, truncate to the result bound
    fn fuse(
        &self,
        state: &ReadyState,
        index_candidates: Vec<usize>,
        scored_candidates: Vec<usize>,
    ) -> Vec<LegalArticle> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut results = Vec::new();

        for position in index_candidates.into_iter().chain(scored_candidates) {
            let Some(article) = state.store.get(position) else {
                continue;
            };
            if !seen.insert(article.id.as_str()) {
                continue;
            }
            results.push(article.clone());
            if results.len() >= self.config.search.max_results {
                break;
            }
        }

        results
    }

    /// The raw article collection: empty before the first load, the full
    /// collection afterwards. Synchronous accessor with no search semantics.
    pub fn get_all_articles(&self) -> Vec<LegalArticle> {
        self.ready
            .get()
            .map(|state| state.store.get_all().to_vec())
            .unwrap_or_default()
    }
}
