//! Capability traits for external collaborators.
//!
//! The report pipeline only ever sees these traits; the concrete HTTP
//! clients live in their own crates and are wired in by the binary. Tests
//! substitute deterministic stubs without touching the network.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::articles::{ArticleRef, Entity, ExtractedContent};

/// Error surfaced by any collaborator call.
///
/// Collaborator crates keep their own typed errors internally and flatten
/// them into this shape at the trait boundary; the pipeline only needs to
/// know which service failed and why.
#[derive(Debug, Error)]
pub enum CollabError {
    #[error("{service} call failed: {reason}")]
    Service { service: &'static str, reason: String },

    #[error("{service} call timed out after {timeout_secs}s")]
    Timeout {
        service: &'static str,
        timeout_secs: u64,
    },
}

impl CollabError {
    /// Flatten an arbitrary error into a [`CollabError::Service`].
    pub fn service(service: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Service {
            service,
            reason: err.to_string(),
        }
    }
}

/// Retrieves raw article descriptors for a search query.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// May return an empty list; the caller decides whether that is fatal.
    async fn fetch_articles(&self, query: &str) -> Result<Vec<ArticleRef>, CollabError>;
}

/// Fetches an article page and pulls out its title and body text.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// `Ok(None)` means the page was reachable but yielded no usable
    /// content; callers treat it the same as an error.
    async fn extract_content(&self, url: &str) -> Result<Option<ExtractedContent>, CollabError>;
}

/// Classifies text into a collaborator-defined sentiment label.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Returns the raw label (e.g. `"POSITIVE"`); mapping into the report's
    /// sentiment space is the pipeline's job.
    async fn classify(&self, text: &str) -> Result<String, CollabError>;
}

/// Produces an abstractive summary of text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, CollabError>;
}

/// Recognizes named entities in text.
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    async fn extract_entities(&self, text: &str) -> Result<Vec<Entity>, CollabError>;
}

/// Converts text into a spoken-audio artifact on disk.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// `language` is a BCP-47-ish code understood by the backing service
    /// (e.g. `"hi"`). Returns the path of the written audio file.
    async fn synthesize(&self, text: &str, language: &str) -> Result<PathBuf, CollabError>;
}
