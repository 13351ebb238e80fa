//! Report data model.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

/// Sentiment bucket for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map a collaborator's raw label into the report's sentiment space.
    ///
    /// Case-insensitive: `"positive"` and `"negative"` map to their buckets;
    /// every other label (including model-specific ones the classifier may
    /// emit) is Neutral.
    #[must_use]
    pub fn from_raw_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            Self::Positive
        } else if label.eq_ignore_ascii_case("negative") {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// One fully processed article. Immutable once built; an article that fails
/// content extraction never becomes one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedArticle {
    pub title: String,
    pub summary: String,
    pub sentiment: Sentiment,
    /// At most three topics, in the extractor's order.
    pub topics: Vec<String>,
}

/// Running sentiment counts. Invariant: the sum of the three buckets equals
/// the number of articles folded so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl SentimentTally {
    /// Increment exactly one bucket.
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

/// Which topics recur across articles versus appear at all.
///
/// `common` holds topics seen more than once; `unique` holds every distinct
/// topic, so `common` is always a subset of `unique`. The redundancy is part
/// of the report shape and kept as-is. Ordered sets keep serialized output
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicOverlap {
    pub common: BTreeSet<String>,
    pub unique: BTreeSet<String>,
}

/// A single remark contrasting the first two processed articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageNote {
    pub comparison: String,
    pub impact: String,
}

/// Aggregate view over all enriched articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparativeAnalysis {
    pub sentiment_distribution: SentimentTally,
    /// Zero notes for fewer than two articles, exactly one otherwise.
    pub coverage_differences: Vec<CoverageNote>,
    pub topic_overlap: TopicOverlap,
}

/// Root report for one company query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub company: String,
    pub articles: Vec<EnrichedArticle>,
    pub comparative: ComparativeAnalysis,
}

/// A report plus the narration audio artifact, when synthesis succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub report: Report,
    pub audio: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_label_positive_maps_case_insensitively() {
        assert_eq!(Sentiment::from_raw_label("POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::from_raw_label("positive"), Sentiment::Positive);
    }

    #[test]
    fn raw_label_negative_maps_case_insensitively() {
        assert_eq!(Sentiment::from_raw_label("NEGATIVE"), Sentiment::Negative);
        assert_eq!(Sentiment::from_raw_label("Negative"), Sentiment::Negative);
    }

    #[test]
    fn unrecognized_labels_map_to_neutral() {
        assert_eq!(Sentiment::from_raw_label("LABEL_1"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_raw_label("mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_raw_label(""), Sentiment::Neutral);
    }

    #[test]
    fn tally_total_matches_recorded_count() {
        let mut tally = SentimentTally::default();
        tally.record(Sentiment::Positive);
        tally.record(Sentiment::Positive);
        tally.record(Sentiment::Negative);
        tally.record(Sentiment::Neutral);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.positive, 2);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 1);
    }
}
