//! Data types exchanged with external collaborators.

use serde::{Deserialize, Serialize};

/// One article descriptor as returned by news retrieval, before any content
/// has been fetched. Identity is the `url`; everything else is metadata the
/// pipeline carries but does not interpret.
///
/// Field names follow the NewsAPI article shape so the retrieval client can
/// deserialize responses directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleRef {
    /// Link to the article. Descriptors without a URL are skipped during
    /// deduplication and never enriched.
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: Option<ArticleSource>,
}

/// Publisher metadata nested inside an [`ArticleRef`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Title and body text pulled out of an article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Page `<title>` text, or `"No Title"` when the page has none.
    pub title: String,
    /// Concatenated paragraph text. May be empty for pages with no usable
    /// prose; callers treat an empty body the same as a failed extraction.
    pub body: String,
}

/// A named entity recognized in article text.
///
/// The `category` space is collaborator-defined (e.g. `ORG`, `PRODUCT`,
/// `LAW`); the pipeline filters against its own allow-list rather than
/// constraining it here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub category: String,
}
