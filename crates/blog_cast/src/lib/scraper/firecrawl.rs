use reqwest::Client;
use serde::Deserialize;

use crate::{scraper::ContentFetcher, RawContent, SourceUrl};

/// Firecrawl `/v1/scrape` client returning the main page content as markdown.
#[derive(Clone)]
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FirecrawlError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Scrape failed: {0}")]
    Scrape(String),
    #[error("Page answered with status {status}: {url}")]
    PageStatus { status: u16, url: String },
    #[error("No markdown content returned for {0}")]
    EmptyContent(String),
}

impl FirecrawlClient {
    pub const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";

    // elements that never carry article text
    const EXCLUDE_TAGS: [&str; 7] = ["nav", "header", "footer", "aside", "script", "style", "form"];

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn send_scrape_request(&self, url: &str) -> Result<ScrapeResponse, FirecrawlError> {
        let body = serde_json::json!({
            "url": url,
            "formats": ["markdown"],
            "onlyMainContent": true,
            "excludeTags": Self::EXCLUDE_TAGS,
        });

        let resp = self
            .client
            .post(format!("{}/v1/scrape", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(FirecrawlError::Api { status, message });
        }

        Ok(resp.json::<ScrapeResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub data: Option<ScrapeData>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeData {
    pub markdown: Option<String>,
    pub metadata: Option<ScrapeMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeMetadata {
    pub title: Option<String>,
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
}

impl ContentFetcher for FirecrawlClient {
    type Error = FirecrawlError;

    #[tracing::instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &SourceUrl) -> Result<RawContent, Self::Error> {
        let response = self.send_scrape_request(url.as_str()).await?;

        if !response.success {
            return Err(FirecrawlError::Scrape(
                response
                    .error
                    .unwrap_or_else(|| "scrape reported failure".into()),
            ));
        }

        let data = response
            .data
            .ok_or_else(|| FirecrawlError::EmptyContent(url.to_string()))?;

        if let Some(status) = data.metadata.as_ref().and_then(|m| m.status_code) {
            if status >= 400 {
                tracing::warn!(status, "Target page answered with an error status");
                return Err(FirecrawlError::PageStatus {
                    status,
                    url: url.to_string(),
                });
            }
        }

        let markdown = data
            .markdown
            .filter(|md| !md.trim().is_empty())
            .ok_or_else(|| FirecrawlError::EmptyContent(url.to_string()))?;

        tracing::info!(bytes = markdown.len(), "Fetched page content");

        Ok(RawContent {
            markdown,
            title: data.metadata.and_then(|m| m.title),
        })
    }
}
