//! Folding enriched articles into the comparative analysis.

use std::collections::BTreeMap;

use crate::types::{ComparativeAnalysis, CoverageNote, EnrichedArticle, SentimentTally, TopicOverlap};

/// Fixed impact text attached to the coverage note.
pub const COVERAGE_IMPACT: &str = "Different aspects of the company covered";

/// Fold an ordered sequence of enriched articles into the comparative
/// section of a report.
///
/// Each article increments exactly one sentiment bucket. Topics are counted
/// across all articles: those with total count > 1 are "common", every
/// distinct topic lands in "unique". With two or more articles, exactly one
/// coverage note contrasts the titles at positions 0 and 1.
///
/// An empty slice is valid and produces an all-zero tally, empty topic sets,
/// and no coverage note.
#[must_use]
pub fn fold_articles(articles: &[EnrichedArticle]) -> ComparativeAnalysis {
    let mut tally = SentimentTally::default();
    let mut topic_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for article in articles {
        tally.record(article.sentiment);
        for topic in &article.topics {
            *topic_counts.entry(topic.as_str()).or_insert(0) += 1;
        }
    }

    let common = topic_counts
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(&topic, _)| topic.to_owned())
        .collect();
    let unique = topic_counts.keys().map(|&t| t.to_owned()).collect();

    let coverage_differences = if articles.len() >= 2 {
        vec![CoverageNote {
            comparison: format!("{} vs {}", articles[0].title, articles[1].title),
            impact: COVERAGE_IMPACT.to_owned(),
        }]
    } else {
        Vec::new()
    };

    ComparativeAnalysis {
        sentiment_distribution: tally,
        coverage_differences,
        topic_overlap: TopicOverlap { common, unique },
    }
}
