//! Report assembly for company news coverage.
//!
//! Takes raw article descriptors for one company, deduplicates them by URL,
//! enriches each article (summary, sentiment label, topics) through the
//! collaborator traits in `newsbrief-core`, folds the results into a
//! comparative analysis, and narrates the sentiment tally as synthesized
//! speech. One call, one report; nothing is shared across requests.

pub mod aggregate;
pub mod dedup;
pub mod enrich;
pub mod error;
pub mod narration;
pub mod pipeline;
pub mod types;

pub use aggregate::fold_articles;
pub use dedup::dedup_articles;
pub use enrich::ArticleEnricher;
pub use error::ReportError;
pub use narration::build_narration;
pub use pipeline::{Collaborators, ReportPipeline};
pub use types::{
    ComparativeAnalysis, CoverageNote, EnrichedArticle, GeneratedReport, Report, Sentiment,
    SentimentTally, TopicOverlap,
};
