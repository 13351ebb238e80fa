//! Shared foundation for the newsbrief workspace.
//!
//! Holds the application configuration, the capability traits behind which
//! every external collaborator sits (news retrieval, content extraction,
//! NLP services, speech synthesis), and the data types that cross those
//! boundaries.

pub mod app_config;
pub mod articles;
pub mod collab;
pub mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use articles::{ArticleRef, ArticleSource, Entity, ExtractedContent};
pub use collab::{
    CollabError, ContentExtractor, EntityExtractor, NewsSource, SentimentClassifier,
    SpeechSynthesizer, Summarizer,
};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
