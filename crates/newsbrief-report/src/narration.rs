//! Narration text for the sentiment tally.

use crate::types::SentimentTally;

/// Render the fixed Hindi narration sentence for a company's tally.
///
/// Pure formatting: counts appear in Positive, Negative, Neutral order and
/// an all-zero tally is as valid as any other. The sentence is handed to the
/// speech synthesizer as-is.
#[must_use]
pub fn build_narration(company: &str, tally: &SentimentTally) -> String {
    format!(
        "{company} के लिए समाचार सारांश। सकारात्मक लेख: {}, नकारात्मक: {}, तटस्थ: {}.",
        tally.positive, tally.negative, tally.neutral
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_embeds_company_and_counts_in_order() {
        let tally = SentimentTally {
            positive: 2,
            negative: 1,
            neutral: 0,
        };
        let text = build_narration("Acme", &tally);
        assert!(text.starts_with("Acme "), "got: {text}");
        assert!(text.contains("सकारात्मक लेख: 2"), "got: {text}");
        assert!(text.contains("नकारात्मक: 1"), "got: {text}");
        assert!(text.contains("तटस्थ: 0"), "got: {text}");
        let p = text.find("सकारात्मक").unwrap();
        let n = text.find("नकारात्मक").unwrap();
        let u = text.find("तटस्थ").unwrap();
        assert!(p < n && n < u, "counts out of order: {text}");
    }

    #[test]
    fn all_zero_tally_is_valid_input() {
        let text = build_narration("Globex", &SentimentTally::default());
        assert!(text.contains("सकारात्मक लेख: 0"), "got: {text}");
        assert!(text.contains("तटस्थ: 0"), "got: {text}");
    }
}
