//! # Inverted Index Module
//!
//! ## Purpose
//! Fast approximate full-text lookup over the article collection. Each
//! article is flattened into a single weighted search string (tags repeated
//! to boost their contribution) and tokenized into a term-frequency postings
//! map.
//!
//! ## Input/Output Specification
//! - **Input**: Article collection at build time, raw lowercased query text
//! - **Output**: Up to `limit` article positions ranked by accumulated term
//!   frequency
//! - **Matching**: A query token matches any indexed term containing it, so
//!   partial and substring tokens still recall documents
//!
//! The index tokenizes queries with its own rules, not the scoring
//! normalizer's: this leg exists for broad recall, the scorer for precise
//! ranking. The index is rebuilt in full whenever the store is loaded; there
//! is no incremental update path.

use crate::LegalArticle;
use regex::Regex;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Minimum term length kept in the index and in query tokenization
const MIN_TERM_LEN: usize = 2;

/// Stable contract for the indexing leg, so the concrete algorithm is
/// swappable behind it
pub trait TextIndex: Send + Sync {
    /// Rebuild the index over the full collection
    fn build(&mut self, articles: &[LegalArticle]);

    /// Return up to `limit` article positions ranked by the index's own
    /// relevance notion; empty or unmatched queries return an empty list
    fn query(&self, text: &str, limit: usize) -> Vec<usize>;
}

/// Token-based inverted index with per-document term frequencies
pub struct InvertedIndex {
    // term -> (article position, term frequency), positions ascending
    postings: HashMap<String, Vec<(usize, u32)>>,
    term_scanner: Regex,
    num_docs: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self {
            postings: HashMap::new(),
            term_scanner: Regex::new(r"[\p{L}\p{N}]+").expect("valid term scanner"),
            num_docs: 0,
        }
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.num_docs
    }

    pub fn is_empty(&self) -> bool {
        self.num_docs == 0
    }

    /// Flatten an article into its weighted search string. Tags are appended
    /// twice more after the plain join so tag terms carry triple frequency.
    fn search_string(article: &LegalArticle) -> String {
        let doubled_tags = article
            .tags
            .iter()
            .map(|t| format!("{} {}", t, t))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{} {} {} {} {} {}",
            article.title,
            article.article,
            article.content,
            article.simplified.as_deref().unwrap_or(""),
            article.tags.join(" "),
            doubled_tags,
        )
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfc().collect::<String>().to_lowercase();
        self.term_scanner
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .filter(|t| t.chars().count() >= MIN_TERM_LEN)
            .collect()
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TextIndex for InvertedIndex {
    fn build(&mut self, articles: &[LegalArticle]) {
        self.postings.clear();
        self.num_docs = articles.len();

        for (position, article) in articles.iter().enumerate() {
            let mut frequencies: HashMap<String, u32> = HashMap::new();
            for term in self.tokenize(&Self::search_string(article)) {
                *frequencies.entry(term).or_insert(0) += 1;
            }
            for (term, frequency) in frequencies {
                self.postings
                    .entry(term)
                    .or_default()
                    .push((position, frequency));
            }
        }

        for entries in self.postings.values_mut() {
            entries.sort_unstable_by_key(|&(position, _)| position);
        }

        tracing::debug!(
            "Inverted index built: {} documents, {} terms",
            self.num_docs,
            self.postings.len()
        );
    }

    fn query(&self, text: &str, limit: usize) -> Vec<usize> {
        let tokens = self.tokenize(text);
        if tokens.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scores: HashMap<usize, u32> = HashMap::new();
        for token in &tokens {
            for (term, entries) in &self.postings {
                if !term.contains(token.as_str()) {
                    continue;
                }
                // Exact term hits count double over substring hits
                let multiplier = if term == token { 2 } else { 1 };
                for &(position, frequency) in entries {
                    *scores.entry(position).or_insert(0) += frequency * multiplier;
                }
            }
        }

        let mut ranked: Vec<(usize, u32)> = scores.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked.into_iter().map(|(position, _)| position).collect()
    }
}
