//! Article page fetching and content extraction.
//!
//! Fetches an article URL with a bounded timeout and pulls out the page
//! title and paragraph text. Implements the
//! [`newsbrief_core::ContentExtractor`] capability for the report pipeline.

pub mod client;
pub mod error;
pub mod extract;

pub use client::ArticleScraper;
pub use error::ScrapeError;
pub use extract::extract_article;
