//! HTTP client for fetching article pages.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use newsbrief_core::{CollabError, ContentExtractor, ExtractedContent};

use crate::error::ScrapeError;
use crate::extract::extract_article;

/// Fetches article pages with a bounded timeout and extracts their content.
///
/// News sites are unreliable scrape targets; every failure here is expected
/// to be absorbed per-article by the caller, so the error surface stays
/// small (network error or non-2xx status).
pub struct ArticleScraper {
    client: Client,
    timeout_secs: u64,
}

impl ArticleScraper {
    /// Creates a scraper with the given per-request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Fetches `url` and extracts its title and body text.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ScrapeError::Http`] on network failure or timeout.
    pub async fn fetch(&self, url: &str) -> Result<ExtractedContent, ScrapeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %url, "page fetch returned non-success status");
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let html = response.text().await?;
        Ok(extract_article(&html))
    }
}

#[async_trait]
impl ContentExtractor for ArticleScraper {
    async fn extract_content(&self, url: &str) -> Result<Option<ExtractedContent>, CollabError> {
        match self.fetch(url).await {
            Ok(content) => Ok(Some(content)),
            Err(ScrapeError::Http(e)) if e.is_timeout() => Err(CollabError::Timeout {
                service: "scraper",
                timeout_secs: self.timeout_secs,
            }),
            Err(e) => Err(CollabError::service("scraper", e)),
        }
    }
}
