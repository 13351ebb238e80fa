//! Report pipeline orchestration.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use newsbrief_core::{
    ContentExtractor, EntityExtractor, NewsSource, SentimentClassifier, SpeechSynthesizer,
    Summarizer,
};

use crate::aggregate::fold_articles;
use crate::dedup::dedup_articles;
use crate::enrich::ArticleEnricher;
use crate::error::ReportError;
use crate::narration::build_narration;
use crate::types::{EnrichedArticle, GeneratedReport, Report};

/// How many articles are enriched concurrently by default.
const DEFAULT_CONCURRENCY: usize = 4;

/// The full set of external collaborators the pipeline drives.
///
/// Everything is behind a trait object so tests can wire in deterministic
/// stubs and the binary can wire in the HTTP clients.
pub struct Collaborators {
    pub news: Arc<dyn NewsSource>,
    pub extractor: Arc<dyn ContentExtractor>,
    pub classifier: Arc<dyn SentimentClassifier>,
    pub summarizer: Arc<dyn Summarizer>,
    pub entities: Arc<dyn EntityExtractor>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

/// Runs one company query end to end: fetch, dedup, enrich, aggregate,
/// narrate. Holds no per-request state; every call builds its report from
/// scratch and discards intermediates on return.
pub struct ReportPipeline {
    collab: Collaborators,
    narration_language: String,
    max_concurrent_enrichments: usize,
}

impl ReportPipeline {
    #[must_use]
    pub fn new(collab: Collaborators, narration_language: impl Into<String>) -> Self {
        Self {
            collab,
            narration_language: narration_language.into(),
            max_concurrent_enrichments: DEFAULT_CONCURRENCY,
        }
    }

    /// Override the enrichment fan-out width. Clamped to at least 1.
    #[must_use]
    pub fn with_concurrency(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent_enrichments = max_concurrent.max(1);
        self
    }

    /// Generate the report and narration audio for one company.
    ///
    /// Articles that fail enrichment are silently excluded; an accumulation
    /// that ends up empty still produces a valid report with an all-zero
    /// tally rather than an error. A failed speech synthesis downgrades the
    /// result to `audio: None` but never fails the request.
    ///
    /// # Errors
    ///
    /// [`ReportError::NoArticles`] when news retrieval fails or returns an
    /// empty list — the only fatal condition.
    pub async fn generate_report(&self, company: &str) -> Result<GeneratedReport, ReportError> {
        let raw = match self.collab.news.fetch_articles(company).await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!(company = %company, error = %e, "news retrieval failed");
                Vec::new()
            }
        };
        if raw.is_empty() {
            tracing::info!(company = %company, "no articles found");
            return Err(ReportError::NoArticles);
        }

        let unique = dedup_articles(raw);
        tracing::debug!(company = %company, count = unique.len(), "deduplicated articles");

        // Enrichment of distinct articles is independent; `buffered` keeps
        // the results in deduplicated order, which the coverage note and
        // topic determinism depend on.
        let enricher = ArticleEnricher::new(
            &*self.collab.extractor,
            &*self.collab.classifier,
            &*self.collab.summarizer,
            &*self.collab.entities,
        );
        let articles: Vec<EnrichedArticle> = stream::iter(unique.iter())
            .map(|article| enricher.enrich(article))
            .buffered(self.max_concurrent_enrichments)
            .filter_map(|enriched| async move { enriched })
            .collect()
            .await;

        tracing::info!(
            company = %company,
            fetched = unique.len(),
            enriched = articles.len(),
            "enrichment complete"
        );

        let comparative = fold_articles(&articles);
        let narration = build_narration(company, &comparative.sentiment_distribution);
        let audio = match self
            .collab
            .synthesizer
            .synthesize(&narration, &self.narration_language)
            .await
        {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(
                    company = %company,
                    error = %e,
                    "speech synthesis failed; returning report without audio"
                );
                None
            }
        };

        Ok(GeneratedReport {
            report: Report {
                company: company.to_owned(),
                articles,
                comparative,
            },
            audio,
        })
    }
}
