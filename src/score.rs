//! # Relevance Scoring Module
//!
//! ## Purpose
//! Ranks every article in the store against the expanded scoring token set,
//! independently of the inverted index. Four signals stack per token: a
//! whole-word match in the composite text, a substring match in the title, an
//! exact tag match, and a plain substring match anywhere.
//!
//! ## Input/Output Specification
//! - **Input**: Scoring token set, precomputed per-article lowercase fields
//! - **Output**: Article positions with non-zero score, descending
//! - **Tie-break**: Equal scores keep store order (stable sort, documented
//!   policy)

use crate::config::RankingConfig;
use regex::Regex;

/// Lowercased per-article fields precomputed at load time so scoring does no
/// repeated case folding per query
#[derive(Debug, Clone)]
pub struct ScoreFields {
    /// Title, simplified text, content and tags joined and lowercased
    pub composite: String,
    /// Lowercased title
    pub title: String,
    /// Lowercased tags
    pub tags: Vec<String>,
}

impl ScoreFields {
    pub fn from_article(article: &crate::LegalArticle) -> Self {
        let composite = format!(
            "{} {} {} {}",
            article.title,
            article.simplified.as_deref().unwrap_or(""),
            article.content,
            article.tags.join(" "),
        )
        .to_lowercase();

        Self {
            composite,
            title: article.title.to_lowercase(),
            tags: article.tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}

/// Keyword scorer with configurable signal weights
pub struct RelevanceScorer {
    weights: RankingConfig,
}

impl RelevanceScorer {
    pub fn new(weights: RankingConfig) -> Self {
        Self { weights }
    }

    /// Score one article against the token set
    fn score(&self, tokens: &[(String, Option<Regex>)], fields: &ScoreFields) -> u32 {
        let mut score = 0;
        for (token, word_boundary) in tokens {
            if let Some(regex) = word_boundary {
                if regex.is_match(&fields.composite) {
                    score += self.weights.whole_word;
                }
            }
            if fields.title.contains(token.as_str()) {
                score += self.weights.title;
            }
            if fields.tags.iter().any(|t| t == token) {
                score += self.weights.exact_tag;
            }
            if fields.composite.contains(token.as_str()) {
                score += self.weights.substring;
            }
        }
        score
    }

    /// Rank all articles against the token set; zero-score articles are
    /// discarded, ties keep store order
    pub fn rank(&self, tokens: &[String], fields: &[ScoreFields]) -> Vec<usize> {
        if tokens.is_empty() {
            return Vec::new();
        }

        // One word-boundary regex per token, not per article
        let compiled: Vec<(String, Option<Regex>)> = tokens
            .iter()
            .map(|token| {
                let pattern = format!(r"\b{}\b", regex::escape(token));
                (token.clone(), Regex::new(&pattern).ok())
            })
            .collect();

        let mut ranked: Vec<(usize, u32)> = fields
            .iter()
            .enumerate()
            .map(|(position, f)| (position, self.score(&compiled, f)))
            .filter(|&(_, score)| score > 0)
            .collect();

        // sort_by is stable: equal scores preserve store order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().map(|(position, _)| position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LegalArticle;

    fn fields(title: &str, content: &str, simplified: Option<&str>, tags: &[&str]) -> ScoreFields {
        ScoreFields::from_article(&LegalArticle {
            id: "x".to_string(),
            article: "1".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            simplified: simplified.map(|s| s.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
    }

    fn scorer() -> RelevanceScorer {
        RelevanceScorer::new(RankingConfig::default())
    }

    #[test]
    fn empty_token_set_scores_nothing() {
        let store = vec![fields("Voting", "everyone votes", None, &["vote"])];
        assert!(scorer().rank(&[], &store).is_empty());
    }

    #[test]
    fn zero_score_articles_are_discarded() {
        let store = vec![
            fields("Voting Rights", "the vote", None, &["vote"]),
            fields("Taxation", "levies and duties", None, &[]),
        ];
        let ranked = scorer().rank(&["vote".to_string()], &store);
        assert_eq!(ranked, vec![0]);
    }

    #[test]
    fn exact_tag_outranks_prose_mention() {
        let store = vec![
            fields("Civic Duties", "citizens vote in elections", None, &[]),
            fields("Participation", "civic participation", None, &["vote"]),
        ];
        let ranked = scorer().rank(&["vote".to_string()], &store);
        assert_eq!(ranked[0], 1);
    }

    #[test]
    fn title_substring_adds_weight() {
        let store = vec![
            fields("General Provisions", "the vote is sacred", None, &[]),
            fields("The Vote", "general provisions", None, &[]),
        ];
        let ranked = scorer().rank(&["vote".to_string()], &store);
        assert_eq!(ranked[0], 1);
    }

    #[test]
    fn whole_word_beats_bare_substring() {
        // "vote" appears as a whole word in one and inside "devotee" in the other
        let store = vec![
            fields("Faith", "a devoted devotee", None, &[]),
            fields("Elections", "each vote counts", None, &[]),
        ];
        let ranked = scorer().rank(&["vote".to_string()], &store);
        assert_eq!(ranked[0], 1);
    }

    #[test]
    fn ties_keep_store_order() {
        let store = vec![
            fields("Assembly", "peaceful assembly", None, &[]),
            fields("Assembly", "peaceful assembly", None, &[]),
        ];
        let ranked = scorer().rank(&["assembly".to_string()], &store);
        assert_eq!(ranked, vec![0, 1]);
    }

    #[test]
    fn signals_stack_per_token() {
        // whole word + title substring + exact tag + substring = 3+5+10+1
        let store = vec![fields("Vote", "vote", None, &["vote"])];
        let compiled = vec![(
            "vote".to_string(),
            Regex::new(r"\bvote\b").ok(),
        )];
        assert_eq!(scorer().score(&compiled, &store[0]), 19);
    }

    #[test]
    fn weights_are_configurable() {
        let heavy_title = RelevanceScorer::new(RankingConfig {
            whole_word: 0,
            title: 100,
            exact_tag: 1,
            substring: 0,
        });
        let store = vec![
            fields("Participation", "x", None, &["vote"]),
            fields("Vote", "x", None, &[]),
        ];
        let ranked = heavy_title.rank(&["vote".to_string()], &store);
        assert_eq!(ranked[0], 1);
    }
}
