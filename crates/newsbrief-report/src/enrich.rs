//! Per-article enrichment: content extraction, summary, sentiment, topics.

use newsbrief_core::{
    ArticleRef, ContentExtractor, EntityExtractor, SentimentClassifier, Summarizer,
};

use crate::types::{EnrichedArticle, Sentiment};

/// Input bound of the sentiment model; bodies are truncated to this many
/// characters before classification.
pub const CLASSIFIER_INPUT_CHARS: usize = 512;

/// Length of the truncation fallback used when summarization fails.
pub const SUMMARY_FALLBACK_CHARS: usize = 100;

/// Maximum topics kept per article.
pub const MAX_TOPICS: usize = 3;

/// Entity categories that qualify as report topics.
pub const TOPIC_CATEGORIES: &[&str] = &["ORG", "PRODUCT", "LAW"];

/// Turns one article descriptor into an [`EnrichedArticle`].
///
/// Every collaborator failure is absorbed here: extraction failure drops the
/// article, summarization failure falls back to truncation, classification
/// failure degrades to Neutral, and entity failure yields no topics. Nothing
/// propagates to the caller.
pub struct ArticleEnricher<'a> {
    extractor: &'a dyn ContentExtractor,
    classifier: &'a dyn SentimentClassifier,
    summarizer: &'a dyn Summarizer,
    entities: &'a dyn EntityExtractor,
}

impl<'a> ArticleEnricher<'a> {
    #[must_use]
    pub fn new(
        extractor: &'a dyn ContentExtractor,
        classifier: &'a dyn SentimentClassifier,
        summarizer: &'a dyn Summarizer,
        entities: &'a dyn EntityExtractor,
    ) -> Self {
        Self {
            extractor,
            classifier,
            summarizer,
            entities,
        }
    }

    /// Enrich one article, or `None` when its content cannot be used.
    ///
    /// `None` is the "drop this article" signal, not an error: the caller
    /// excludes it from the accumulation and carries on.
    pub async fn enrich(&self, article: &ArticleRef) -> Option<EnrichedArticle> {
        let url = article.url.as_deref()?;

        let content = match self.extractor.extract_content(url).await {
            Ok(Some(content)) if !content.body.is_empty() => content,
            Ok(_) => {
                tracing::warn!(url = %url, "no usable content extracted; dropping article");
                return None;
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "content extraction failed; dropping article");
                return None;
            }
        };

        let summary = match self.summarizer.summarize(&content.body).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "summarization failed; using truncation fallback");
                fallback_summary(&content.body)
            }
        };

        let sentiment = match self
            .classifier
            .classify(truncate_chars(&content.body, CLASSIFIER_INPUT_CHARS))
            .await
        {
            Ok(label) => Sentiment::from_raw_label(&label),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "classification failed; defaulting to neutral");
                Sentiment::Neutral
            }
        };

        let topics = match self.entities.extract_entities(&content.body).await {
            Ok(entities) => entities
                .into_iter()
                .filter(|entity| TOPIC_CATEGORIES.contains(&entity.category.as_str()))
                .map(|entity| entity.text)
                .take(MAX_TOPICS)
                .collect(),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "entity extraction failed; no topics");
                Vec::new()
            }
        };

        Some(EnrichedArticle {
            title: content.title,
            summary,
            sentiment,
            topics,
        })
    }
}

/// First [`SUMMARY_FALLBACK_CHARS`] characters of `body` plus an ellipsis
/// marker, or the body verbatim when it fits.
fn fallback_summary(body: &str) -> String {
    match truncate_boundary(body, SUMMARY_FALLBACK_CHARS) {
        Some(idx) => format!("{}...", &body[..idx]),
        None => body.to_owned(),
    }
}

/// Truncate `s` to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> &str {
    match truncate_boundary(s, max) {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// Byte index of the `max`-th character, or `None` when `s` has no more
/// than `max` characters.
fn truncate_boundary(s: &str, max: usize) -> Option<usize> {
    s.char_indices().nth(max).map(|(idx, _)| idx)
}
