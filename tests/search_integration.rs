//! End-to-end tests for the search facade: determinism, bounds, fusion,
//! query expansion recall, initialization behavior and source recovery.

use std::collections::HashSet;
use std::sync::Arc;

use cedizen_search::config::{Config, NormalizerConfig};
use cedizen_search::engine::SearchEngine;
use cedizen_search::index::{InvertedIndex, TextIndex};
use cedizen_search::normalize::QueryNormalizer;
use cedizen_search::sources::{FileSource, HttpSource, StaticSource};
use cedizen_search::LegalArticle;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

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

fn fixture_articles() -> Vec<LegalArticle> {
    vec![
        article(
            "art-assembly",
            "21",
            "Freedom of Assembly",
            "Citizens may assemble peacefully and without arms.",
            &["protest"],
        ),
        article(
            "art-vote-tag",
            "42",
            "Right to Vote",
            "Citizens take part in the conduct of public affairs.",
            &["vote"],
        ),
        article(
            "art-vote-prose",
            "43",
            "Electoral Administration",
            "The commission counts every vote cast at the polls.",
            &[],
        ),
        article(
            "art-demo",
            "44",
            "Public Order",
            "A demonstration on the highway requires coordination.",
            &[],
        ),
        article(
            "art-search",
            "45",
            "Judicial Warrants",
            "A judge searches the record before issuing a warrant.",
            &["warrant"],
        ),
    ]
}

fn engine_over(articles: Vec<LegalArticle>) -> SearchEngine {
    SearchEngine::new(
        Arc::new(Config::default()),
        Box::new(StaticSource::new(articles)),
    )
}

#[tokio::test]
async fn repeated_calls_return_identical_ordered_lists() {
    let engine = engine_over(fixture_articles());
    let a = engine.search("peaceful protest").await;
    let b = engine.search("peaceful protest").await;
    let c = engine.search("peaceful protest").await;
    assert!(!a.is_empty());
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[tokio::test]
async fn results_are_bounded_to_five() {
    let articles: Vec<LegalArticle> = (0..20)
        .map(|i| {
            article(
                &format!("art-{}", i),
                &i.to_string(),
                "Civic Duties",
                "Citizens vote in every election.",
                &["vote"],
            )
        })
        .collect();
    let engine = engine_over(articles);
    let results = engine.search("vote").await;
    assert!(results.len() <= 5);
}

#[tokio::test]
async fn no_article_appears_twice() {
    let engine = engine_over(fixture_articles());
    let results = engine.search("vote election protest citizens").await;
    let ids: HashSet<&str> = results.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids.len(), results.len());
}

#[tokio::test]
async fn empty_and_whitespace_queries_return_empty() {
    let engine = engine_over(fixture_articles());
    assert!(engine.search("").await.is_empty());
    assert!(engine.search("   ").await.is_empty());
}

#[tokio::test]
async fn stop_word_query_reaches_only_the_index_leg() {
    // The scoring path drops every token of "the a of"; whatever comes back
    // must therefore be exactly what the index leg alone produces. This pins
    // the two-pass design: broad recall via raw tokenization, precise
    // ranking via expanded scoring.
    let normalizer = QueryNormalizer::new(NormalizerConfig::default());
    assert!(normalizer.expand("the a of").is_empty());

    let articles = fixture_articles();
    let mut index = InvertedIndex::new();
    index.build(&articles);
    let index_only: Vec<&str> = index
        .query("the a of", 5)
        .into_iter()
        .map(|pos| articles[pos].id.as_str())
        .collect();

    let engine = engine_over(fixture_articles());
    let fused: Vec<String> = engine
        .search("the a of")
        .await
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(fused, index_only);
}

#[tokio::test]
async fn exact_tag_ranks_at_or_above_prose_mention() {
    let engine = engine_over(fixture_articles());
    let results = engine.search("vote").await;
    let rank_of = |id: &str| results.iter().position(|a| a.id == id);

    let tagged = rank_of("art-vote-tag").expect("tagged article present");
    let prose = rank_of("art-vote-prose").expect("prose article present");
    assert!(tagged < prose);
}

#[tokio::test]
async fn synonym_expansion_recalls_in_both_directions() {
    let engine = engine_over(fixture_articles());

    // "demonstration" -> canonical "protest" -> the tagged assembly article
    let results = engine.search("demonstration").await;
    assert!(results.iter().any(|a| a.id == "art-assembly"));

    // "protest" -> alternate "demonstration" -> the prose-only article
    let results = engine.search("protest").await;
    assert!(results.iter().any(|a| a.id == "art-demo"));
}

#[tokio::test]
async fn stemming_recalls_inflected_forms() {
    let engine = engine_over(fixture_articles());
    let results = engine.search("searching").await;
    assert!(results.iter().any(|a| a.id == "art-search"));
}

#[tokio::test]
async fn scenario_peaceful_protest_ranks_assembly_first() {
    let engine = engine_over(fixture_articles());
    let results = engine.search("Is peaceful protest legal?").await;
    assert_eq!(results[0].id, "art-assembly");
}

#[tokio::test]
async fn scenario_article_number_is_searchable() {
    let engine = engine_over(fixture_articles());
    let results = engine.search("42").await;
    assert!(results.iter().any(|a| a.id == "art-vote-tag"));
}

#[tokio::test]
async fn scenario_unknown_term_returns_empty() {
    let engine = engine_over(fixture_articles());
    assert!(engine.search("xyzzy123").await.is_empty());
}

#[tokio::test]
async fn bundled_collection_loads_and_searches() {
    let engine = SearchEngine::new(
        Arc::new(Config::default()),
        Box::new(FileSource::new("data/constitution.json")),
    );
    assert!(engine.init().await > 0);

    let results = engine.search("Is peaceful protest legal?").await;
    assert_eq!(results[0].id, "art-21");

    let results = engine.search("42").await;
    assert!(results.iter().any(|a| a.id == "art-42"));
}

#[tokio::test]
async fn http_source_serves_a_collection() {
    let server = MockServer::start().await;
    let body = serde_json::to_string(&fixture_articles()).unwrap();
    Mock::given(method("GET"))
        .and(path("/data/constitution.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let engine = SearchEngine::new(
        Arc::new(Config::default()),
        Box::new(HttpSource::new(format!(
            "{}/data/constitution.json",
            server.uri()
        ))),
    );
    let results = engine.search("peaceful protest").await;
    assert!(results.iter().any(|a| a.id == "art-assembly"));
}

#[tokio::test]
async fn http_failure_degrades_to_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/constitution.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = SearchEngine::new(
        Arc::new(Config::default()),
        Box::new(HttpSource::new(format!(
            "{}/data/constitution.json",
            server.uri()
        ))),
    );
    assert!(engine.search("protest").await.is_empty());
    assert!(engine.get_all_articles().is_empty());
}
