// HTML to plain text for job descriptions

use scraper::Html;

/// Collapse an HTML fragment to whitespace-normalized plain text.
pub fn plain_text(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
