//! # Cedizen CLI Driver
//!
//! ## Purpose
//! Command-line entry point for the civic-education search engine. Wires the
//! configuration, logging and storage together and exposes the library's
//! operations as subcommands.
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Build the search engine over the configured article collection
//! 4. Dispatch the requested subcommand

use clap::{Arg, ArgMatches, Command};
use std::sync::Arc;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use cedizen_search::{
    cases::CaseLibrary,
    config::Config,
    engine::SearchEngine,
    errors::{Result, SearchError},
    sources::FileSource,
    storage::StorageManager,
    utils::TextUtils,
    AppState, LegalArticle,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("cedizen")
        .version("0.1.0")
        .author("Cedizen Team")
        .about("Civic-education legal article search")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("search")
                .about("Search the constitutional articles")
                .arg(Arg::new("query").required(true).num_args(1..)),
        )
        .subcommand(Command::new("articles").about("List all articles"))
        .subcommand(
            Command::new("article")
                .about("Show one article in full and record it in the reading history")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("cases")
                .about("Search the judicial case summaries")
                .arg(Arg::new("term").required(true).num_args(1..)),
        )
        .subcommand(
            Command::new("save")
                .about("Toggle an article in the saved list")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(Command::new("saved").about("List saved articles"))
        .subcommand(Command::new("history").about("Show the reading history"))
        .get_matches();

    let config_path = matches.get_one::<String>("config").unwrap();
    let config = Arc::new(Config::from_file(config_path)?);

    init_logging(&config)?;
    tracing::info!("Configuration loaded from: {}", config_path);

    let state = initialize_components(config).await?;

    match matches.subcommand() {
        Some(("search", sub)) => run_search(&state, sub).await,
        Some(("articles", _)) => run_articles(&state).await,
        Some(("article", sub)) => run_article(&state, sub).await,
        Some(("cases", sub)) => run_cases(&state, sub).await,
        Some(("save", sub)) => run_save(&state, sub).await,
        Some(("saved", _)) => run_saved(&state).await,
        Some(("history", _)) => run_history(&state).await,
        _ => unreachable!("subcommand is required"),
    }
}

/// Initialize logging and tracing
fn init_logging(config: &Config) -> Result<()> {
    let level: tracing::Level =
        config
            .logging
            .level
            .parse()
            .map_err(|_| SearchError::Config {
                message: format!("Invalid log level: {}", config.logging.level),
            })?;

    let filter = LevelFilter::from_level(level);
    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json().with_filter(filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(false).with_filter(filter))
            .init();
    }

    Ok(())
}

/// Build the shared application state
async fn initialize_components(config: Arc<Config>) -> Result<AppState> {
    let source = FileSource::new(&config.data.articles_path);
    let engine = Arc::new(SearchEngine::new(config.clone(), Box::new(source)));
    let storage = Arc::new(StorageManager::new(config.storage.clone()).await?);

    Ok(AppState {
        config,
        engine,
        storage,
    })
}

fn joined_arg(matches: &ArgMatches, name: &str) -> String {
    matches
        .get_many::<String>(name)
        .unwrap()
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_article_line(index: usize, article: &LegalArticle) {
    let body = article.simplified.as_deref().unwrap_or(&article.content);
    println!(
        "{}. Article {} — {}",
        index + 1,
        article.article,
        article.title
    );
    println!("   {}", TextUtils::extract_preview(body, 24));
    if !article.tags.is_empty() {
        println!("   [{}]", article.tags.join(", "));
    }
}

async fn run_search(state: &AppState, matches: &ArgMatches) -> Result<()> {
    let query = joined_arg(matches, "query");
    let results = state.engine.search(&query).await;

    if results.is_empty() {
        println!("No results for '{}'", query);
        return Ok(());
    }

    for (i, article) in results.iter().enumerate() {
        print_article_line(i, article);
    }
    Ok(())
}

async fn run_articles(state: &AppState) -> Result<()> {
    state.engine.init().await;
    for article in state.engine.get_all_articles() {
        println!(
            "{:10} Article {:>4}  {}",
            article.id, article.article, article.title
        );
    }
    Ok(())
}

async fn run_article(state: &AppState, matches: &ArgMatches) -> Result<()> {
    let id = matches.get_one::<String>("id").unwrap();
    state.engine.init().await;

    let all = state.engine.get_all_articles();
    let Some(article) = all.iter().find(|a| &a.id == id) else {
        println!("No article with id '{}'", id);
        return Ok(());
    };

    println!("Article {} — {}", article.article, article.title);
    println!();
    println!("{}", article.content);
    if let Some(simplified) = &article.simplified {
        println!();
        println!("In plain language: {}", simplified);
    }
    if !article.tags.is_empty() {
        println!();
        println!("Tags: {}", article.tags.join(", "));
    }

    state.storage.add_to_history(id).await?;
    state.storage.flush().await?;
    Ok(())
}

async fn run_cases(state: &AppState, matches: &ArgMatches) -> Result<()> {
    let term = joined_arg(matches, "term");
    let library = CaseLibrary::load(&state.config.data.cases_path).await;
    let results = library.search_cases(&term);

    if results.is_empty() {
        println!("No cases match '{}'", term);
        return Ok(());
    }

    for case in results {
        println!("{} ({}, {}) — {}", case.title, case.court, case.year, case.parties);
        println!("   {}", TextUtils::extract_preview(&case.summary, 24));
    }
    Ok(())
}

async fn run_save(state: &AppState, matches: &ArgMatches) -> Result<()> {
    let id = matches.get_one::<String>("id").unwrap();
    let saved = state.storage.toggle_saved(id).await?;
    if saved.iter().any(|s| s == id) {
        println!("Saved '{}' ({} total)", id, saved.len());
    } else {
        println!("Removed '{}' ({} total)", id, saved.len());
    }
    state.storage.flush().await?;
    Ok(())
}

async fn run_saved(state: &AppState) -> Result<()> {
    let saved = state.storage.get_saved_articles().await?;
    if saved.is_empty() {
        println!("No saved articles");
        return Ok(());
    }

    state.engine.init().await;
    let all = state.engine.get_all_articles();
    for id in saved {
        match all.iter().find(|a| a.id == id) {
            Some(article) => println!("{:10} {}", id, article.title),
            None => println!("{:10} (not in the current collection)", id),
        }
    }
    Ok(())
}

async fn run_history(state: &AppState) -> Result<()> {
    let history = state.storage.get_history().await?;
    if history.is_empty() {
        println!("No reading history");
        return Ok(());
    }

    for entry in history {
        println!(
            "{}  {}",
            entry.viewed_at.format("%Y-%m-%d %H:%M"),
            entry.article_id
        );
    }
    Ok(())
}
