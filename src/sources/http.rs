//! Remote article collection fetched over HTTP, mirroring the hosted
//! `/data/constitution.json` deployment of the original product.

use super::ArticleSource;
use crate::errors::{Result, SearchError};
use crate::LegalArticle;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-backed article source
pub struct HttpSource {
    url: String,
    name: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let name = format!("http:{}", url);
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { url, name, client }
    }
}

#[async_trait]
impl ArticleSource for HttpSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_articles(&self) -> Result<Vec<LegalArticle>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SearchError::DataSourceUnavailable {
                origin: self.name.clone(),
                details: e.to_string(),
            })?;

        response
            .json::<Vec<LegalArticle>>()
            .await
            .map_err(|e| SearchError::DataParsing {
                origin: self.name.clone(),
                details: e.to_string(),
            })
    }
}
