//! HTML content extraction.
//!
//! Pulls the `<title>` and paragraph prose out of an article page. No
//! readability heuristics: every non-empty `<p>` contributes, which matches
//! how general news pages carry their body text.

use scraper::{Html, Selector};

use newsbrief_core::ExtractedContent;

/// Placeholder used when a page carries no `<title>` element.
const NO_TITLE: &str = "No Title";

/// Extract title and body text from an article page.
///
/// The title is the trimmed `<title>` text (or `"No Title"`). The body is
/// every non-empty `<p>` element's text, whitespace-normalized and joined
/// with single spaces. An empty body is a valid result; callers decide how
/// to treat it.
#[must_use]
pub fn extract_article(html: &str) -> ExtractedContent {
    let document = Html::parse_document(html);

    // Selectors are static and known-valid.
    let title_selector = Selector::parse("title").expect("valid selector");
    let paragraph_selector = Selector::parse("p").expect("valid selector");

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let body = document
        .select(&paragraph_selector)
        .map(|p| collapse_whitespace(&p.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    ExtractedContent { title, body }
}

/// Trim and collapse internal whitespace runs to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
