//! HTTP client for the NewsAPI `everything` endpoint.
//!
//! Retrieves raw article descriptors for a company query. Implements the
//! [`newsbrief_core::NewsSource`] capability so the report pipeline never
//! sees NewsAPI specifics.

pub mod client;
pub mod error;
pub mod types;

pub use client::NewsApiClient;
pub use error::NewsApiError;
pub use types::EverythingResponse;
