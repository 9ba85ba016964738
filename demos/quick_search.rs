//! Minimal end-to-end walkthrough: build an engine over an in-memory
//! collection and run a few queries.
//!
//! Run with: cargo run --example quick_search

use std::sync::Arc;

use cedizen_search::config::Config;
use cedizen_search::engine::SearchEngine;
use cedizen_search::sources::StaticSource;
use cedizen_search::LegalArticle;

fn article(id: &str, label: &str, title: &str, content: &str, tags: &[&str]) -> LegalArticle {
    LegalArticle {
        id: id.to_string(),
        article: label.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        simplified: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let collection = vec![
        article(
            "art-21",
            "21",
            "Freedom of Assembly",
            "Citizens may assemble peacefully and without arms.",
            &["protest", "assembly"],
        ),
        article(
            "art-42",
            "42",
            "Right to Vote",
            "Every adult citizen may vote by universal, equal and secret suffrage.",
            &["vote", "election"],
        ),
    ];

    let engine = SearchEngine::new(
        Arc::new(Config::default()),
        Box::new(StaticSource::new(collection)),
    );

    for query in ["Is a peaceful demonstration legal?", "42", "xyzzy"] {
        let results = engine.search(query).await;
        println!("query: {:?}", query);
        if results.is_empty() {
            println!("  (no results)");
        }
        for hit in results {
            println!("  Article {} — {}", hit.article, hit.title);
        }
    }
}
