//! Wire types for NewsAPI responses.

use newsbrief_core::ArticleRef;
use serde::Deserialize;

/// Envelope returned by `/v2/everything`.
///
/// On success `status` is `"ok"`; on failure NewsAPI sets `status` to
/// `"error"` and fills `code`/`message` instead of `articles`.
#[derive(Debug, Deserialize)]
pub struct EverythingResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<ArticleRef>,
}
