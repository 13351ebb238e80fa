//! URL deduplication of raw article descriptors.

use std::collections::HashSet;

use newsbrief_core::ArticleRef;

/// Maximum number of unique articles carried into enrichment.
pub const MAX_ARTICLES: usize = 10;

/// Keep the first [`MAX_ARTICLES`] descriptors with distinct, non-empty
/// URLs, preserving first-seen order.
///
/// Descriptors with an absent or empty URL are skipped and do not count
/// toward the cap. Dedup is exact-URL only; near-identical content behind
/// different URLs is out of scope.
#[must_use]
pub fn dedup_articles(articles: Vec<ArticleRef>) -> Vec<ArticleRef> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for article in articles {
        if unique.len() >= MAX_ARTICLES {
            break;
        }
        let Some(url) = article.url.as_deref() else {
            continue;
        };
        if url.is_empty() {
            continue;
        }
        if seen.insert(url.to_owned()) {
            unique.push(article);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: Option<&str>) -> ArticleRef {
        ArticleRef {
            url: url.map(str::to_owned),
            ..ArticleRef::default()
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedup_articles(Vec::new()).is_empty());
    }

    #[test]
    fn duplicate_urls_keep_first_occurrence_only() {
        let input = vec![
            article(Some("https://a.example/1")),
            article(Some("https://a.example/2")),
            article(Some("https://a.example/1")),
        ];
        let out = dedup_articles(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].url.as_deref(), Some("https://a.example/1"));
        assert_eq!(out[1].url.as_deref(), Some("https://a.example/2"));
    }

    #[test]
    fn missing_and_empty_urls_are_skipped_without_counting() {
        let mut input = vec![article(None), article(Some(""))];
        for i in 0..MAX_ARTICLES {
            input.push(article(Some(&format!("https://a.example/{i}"))));
        }
        let out = dedup_articles(input);
        assert_eq!(out.len(), MAX_ARTICLES);
        assert!(out.iter().all(|a| a.url.as_deref().is_some_and(|u| !u.is_empty())));
    }

    #[test]
    fn output_capped_at_max_articles() {
        let input: Vec<ArticleRef> = (0..25)
            .map(|i| article(Some(&format!("https://a.example/{i}"))))
            .collect();
        let out = dedup_articles(input);
        assert_eq!(out.len(), MAX_ARTICLES);
        // First-seen order preserved.
        assert_eq!(out[0].url.as_deref(), Some("https://a.example/0"));
        assert_eq!(out[9].url.as_deref(), Some("https://a.example/9"));
    }

    #[test]
    fn output_shorter_than_cap_when_few_distinct_urls() {
        let input = vec![
            article(Some("https://a.example/only")),
            article(Some("https://a.example/only")),
            article(Some("https://a.example/only")),
        ];
        let out = dedup_articles(input);
        assert_eq!(out.len(), 1);
    }
}
