//! HTTP client for the NewsAPI REST API.
//!
//! Wraps `reqwest` with NewsAPI-specific error handling, API key management,
//! and typed response deserialization. The `"status"` field in the JSON
//! envelope is checked on every call and API-level errors surface as
//! [`NewsApiError::ApiError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use newsbrief_core::{ArticleRef, CollabError, NewsSource};

use crate::error::NewsApiError;
use crate::types::EverythingResponse;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/";

/// Client for the NewsAPI REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`NewsApiClient::new`]
/// for production or [`NewsApiClient::with_base_url`] to point at a mock
/// server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production NewsAPI.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NewsApiError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsApiError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joined paths resolve under the root rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| NewsApiError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches the `everything` endpoint for articles matching `query`.
    ///
    /// Returns the raw descriptor list in NewsAPI's relevance order. An empty
    /// list is a valid result; callers decide whether it is fatal.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::ApiError`] if the envelope `status` is not `"ok"`.
    /// - [`NewsApiError::Http`] on network failure.
    /// - [`NewsApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`NewsApiError::Deserialize`] if the body does not match the
    ///   expected envelope shape.
    pub async fn everything(&self, query: &str) -> Result<Vec<ArticleRef>, NewsApiError> {
        let mut url = self
            .base_url
            .join("v2/everything")
            .map_err(|e| NewsApiError::ApiError(format!("invalid endpoint URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("apiKey", &self.api_key);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                status = status.as_u16(),
                url = %redact_key(url.as_str()),
                "newsapi returned non-success status"
            );
        }

        // NewsAPI reports auth/quota problems with a JSON error envelope on
        // non-2xx statuses; prefer its message over a bare status code.
        let body = response.text().await?;
        let envelope = serde_json::from_str::<EverythingResponse>(&body).map_err(|e| {
            if status.is_success() {
                NewsApiError::Deserialize {
                    context: format!("everything(q={query})"),
                    source: e,
                }
            } else {
                NewsApiError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: redact_key(url.as_str()),
                }
            }
        })?;

        if envelope.status != "ok" {
            let code = envelope.code.unwrap_or_else(|| "unknown".to_string());
            let message = envelope.message.unwrap_or_default();
            return Err(NewsApiError::ApiError(format!("{code}: {message}")));
        }

        Ok(envelope.articles)
    }
}

/// Strip the `apiKey` query value from a URL destined for error messages.
fn redact_key(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            let pairs: Vec<(String, String)> = parsed
                .query_pairs()
                .map(|(k, v)| {
                    if k == "apiKey" {
                        (k.into_owned(), "[redacted]".to_string())
                    } else {
                        (k.into_owned(), v.into_owned())
                    }
                })
                .collect();
            parsed.query_pairs_mut().clear().extend_pairs(pairs);
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch_articles(&self, query: &str) -> Result<Vec<ArticleRef>, CollabError> {
        self.everything(query)
            .await
            .map_err(|e| CollabError::service("newsapi", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_key_strips_api_key_value() {
        let url = "https://newsapi.org/v2/everything?q=acme&apiKey=super-secret";
        let redacted = redact_key(url);
        assert!(!redacted.contains("super-secret"), "got: {redacted}");
        assert!(redacted.contains("q=acme"), "got: {redacted}");
    }

    #[test]
    fn redact_key_passes_through_unparseable_input() {
        assert_eq!(redact_key("not a url"), "not a url");
    }
}
