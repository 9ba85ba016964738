//! # Query Normalization Module
//!
//! ## Purpose
//! Turns a raw user query into an expanded, deduplicated set of scoring
//! tokens: lowercasing, punctuation stripping, stop-word removal, suffix
//! stemming and bidirectional synonym expansion.
//!
//! ## Input/Output Specification
//! - **Input**: Raw query text, arbitrary punctuation and casing
//! - **Output**: Ordered, deduplicated scoring token set
//! - **Behavior**: Empty input yields an empty token set
//!
//! The suffix heuristics are independent and lossy; they may overstem. That
//! is an accepted trade-off of recall over precision for a corpus of a few
//! hundred documents.

use crate::config::NormalizerConfig;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;

/// Function words and generic query terms excluded from scoring
const STOP_WORDS: &[&str] = &[
    "the", "is", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "down", "if", "can", "cant", "cannot", "could", "would", "should", "will",
    "shall", "may", "might", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "no", "not", "i", "you", "he", "she", "it", "we", "they", "my", "your", "his", "her", "its",
    "their", "this", "that", "these", "those", "who", "whom", "whose", "which", "what", "where",
    "when", "why", "how", "all", "any", "some", "one", "just", "like", "note", "please", "try",
    "keywords", "question", "year", "years", "old",
];

/// Canonical keyword to alternate surface forms, applied in both directions
const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "protest",
        &["demo", "demonstration", "march", "procession", "rally", "gather", "gathering"],
    ),
    (
        "police",
        &["officer", "arrest", "handcuff", "jail", "cell", "detain"],
    ),
    (
        "phone",
        &["mobile", "cellphone", "device", "messages", "calls", "whatsapp"],
    ),
    ("money", &["pay", "salary", "compensation", "bribe", "fraud"]),
    ("church", &["religion", "worship", "faith", "belief", "pastor"]),
    ("land", &["property", "house", "building", "home", "evict"]),
];

/// Query normalizer owning its stop-word set and synonym tables
pub struct QueryNormalizer {
    config: NormalizerConfig,
    stop_words: HashSet<&'static str>,
    synonyms: HashMap<&'static str, &'static [&'static str]>,
    // alternate surface form -> canonical keys listing it
    reverse: HashMap<&'static str, Vec<&'static str>>,
}

impl QueryNormalizer {
    /// Create a normalizer with the static stop-word and synonym tables
    pub fn new(config: NormalizerConfig) -> Self {
        let stop_words = STOP_WORDS.iter().copied().collect();

        let mut synonyms = HashMap::new();
        let mut reverse: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for (key, alternates) in SYNONYMS {
            synonyms.insert(*key, *alternates);
            for alt in *alternates {
                reverse.entry(*alt).or_default().push(*key);
            }
        }

        Self {
            config,
            stop_words,
            synonyms,
            reverse,
        }
    }

    /// Lowercase the query and strip everything except letters, digits and
    /// whitespace
    fn sanitize(&self, query: &str) -> String {
        query
            .nfc()
            .collect::<String>()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }

    /// Expand a raw query into the deduplicated scoring token set
    pub fn expand(&self, query: &str) -> Vec<String> {
        let cleaned = self.sanitize(query);
        let words: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.config.min_word_len)
            .filter(|w| !self.stop_words.contains(*w))
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut tokens: Vec<String> = Vec::new();
        let push = |token: String, seen: &mut HashSet<String>, tokens: &mut Vec<String>| {
            if seen.insert(token.clone()) {
                tokens.push(token);
            }
        };

        for word in &words {
            push(word.to_string(), &mut seen, &mut tokens);
        }

        for word in &words {
            let len = word.chars().count();

            // Independent suffix heuristics; all applicable stems are added
            if word.ends_with("ing") && len > self.config.ing_suffix_min_len {
                push(word[..word.len() - 3].to_string(), &mut seen, &mut tokens);
            }
            if word.ends_with("ies") && len > self.config.ies_suffix_min_len {
                push(format!("{}y", &word[..word.len() - 3]), &mut seen, &mut tokens);
            }
            if word.ends_with('s') && len > self.config.plural_suffix_min_len {
                push(word[..word.len() - 1].to_string(), &mut seen, &mut tokens);
            }

            if let Some(alternates) = self.synonyms.get(*word) {
                for alt in *alternates {
                    push(alt.to_string(), &mut seen, &mut tokens);
                }
            }
            if let Some(keys) = self.reverse.get(*word) {
                for key in keys {
                    push(key.to_string(), &mut seen, &mut tokens);
                }
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> QueryNormalizer {
        QueryNormalizer::new(NormalizerConfig::default())
    }

    #[test]
    fn empty_query_yields_empty_token_set() {
        assert!(normalizer().expand("").is_empty());
        assert!(normalizer().expand("   ").is_empty());
    }

    #[test]
    fn stop_words_and_short_words_are_dropped() {
        assert!(normalizer().expand("the a of is").is_empty());
        assert!(normalizer().expand("to be or not to be").is_empty());
    }

    #[test]
    fn punctuation_is_stripped() {
        let tokens = normalizer().expand("Is peaceful protest legal?");
        assert!(tokens.contains(&"peaceful".to_string()));
        assert!(tokens.contains(&"protest".to_string()));
        assert!(tokens.contains(&"legal".to_string()));
        assert!(!tokens.iter().any(|t| t.contains('?')));
    }

    #[test]
    fn ing_suffix_is_stemmed_on_long_words() {
        let tokens = normalizer().expand("searching");
        assert!(tokens.contains(&"searching".to_string()));
        assert!(tokens.contains(&"search".to_string()));
        // "going" has five characters, not past the threshold
        let tokens = normalizer().expand("going");
        assert!(!tokens.contains(&"go".to_string()));
    }

    #[test]
    fn ies_and_plural_suffixes_both_apply() {
        let tokens = normalizer().expand("liberties");
        assert!(tokens.contains(&"liberty".to_string()));
        assert!(tokens.contains(&"libertie".to_string()));
    }

    #[test]
    fn plural_suffix_respects_threshold() {
        let tokens = normalizer().expand("laws rights");
        assert!(tokens.contains(&"law".to_string()));
        assert!(tokens.contains(&"right".to_string()));
    }

    #[test]
    fn synonym_expansion_is_bidirectional() {
        let forward = normalizer().expand("protest");
        assert!(forward.contains(&"demonstration".to_string()));
        assert!(forward.contains(&"rally".to_string()));

        let backward = normalizer().expand("demonstration");
        assert!(backward.contains(&"protest".to_string()));
    }

    #[test]
    fn tokens_are_deduplicated() {
        let tokens = normalizer().expand("protest protest march");
        let mut sorted = tokens.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tokens.len(), sorted.len());
    }
}
