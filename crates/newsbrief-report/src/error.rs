use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// News retrieval produced nothing usable for the query. The only fatal
    /// condition in the pipeline; its display text is the user-visible
    /// message.
    #[error("No articles found")]
    NoArticles,
}
