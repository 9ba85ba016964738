//! Bundled article collection read from a JSON file on disk.

use super::ArticleSource;
use crate::errors::{Result, SearchError};
use crate::LegalArticle;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File-backed article source
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

#[async_trait]
impl ArticleSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_articles(&self) -> Result<Vec<LegalArticle>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SearchError::DataSourceUnavailable {
                origin: self.name.clone(),
                details: e.to_string(),
            }
        })?;

        serde_json::from_str(&content).map_err(|e| SearchError::DataParsing {
            origin: self.name.clone(),
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_a_source_error() {
        let source = FileSource::new("does/not/exist.json");
        let err = source.fetch_articles().await.unwrap_err();
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn malformed_json_is_a_parsing_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let source = FileSource::new(&path);
        let err = source.fetch_articles().await.unwrap_err();
        assert!(matches!(err, SearchError::DataParsing { .. }));
    }

    #[tokio::test]
    async fn valid_collection_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        let json = r#"[
            {"id": "art-1", "article": "1", "title": "Sovereignty",
             "content": "All power derives from the people.", "tags": ["sovereignty"]}
        ]"#;
        tokio::fs::write(&path, json).await.unwrap();

        let source = FileSource::new(&path);
        let articles = source.fetch_articles().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "art-1");
        assert!(articles[0].simplified.is_none());
    }
}
