// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML output for search hits.
//!
//! Two primitives and one pipeline:
//!
//! - `escape_html` neutralizes the five HTML-significant characters.
//! - `highlighter` wraps a string in the highlight span. It does not escape.
//! - `highlight_text` is the only safe way to combine them. Spans are
//!   resolved on the raw text, then every piece of user text is escaped on
//!   the way out and only the span markup is emitted verbatim. Matched text
//!   containing `<` or `&` can't break the markup, and a term like "span" or
//!   "amp" can't match inside markup or entities that were already emitted.

use serde::{Deserialize, Serialize};

use crate::search::get_all_term_indices;

/// CSS class the host stylesheet uses for matched text.
pub const HIGHLIGHT_CLASS: &str = "search-result-file-matched-text";

/// Replacements applied in order. Ampersand must go first or the entities
/// introduced by the later replacements would be escaped again.
const HTML_ESCAPES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#039;"),
];

/// Escape `&`, `<`, `>`, `"` and `'` for embedding in HTML.
///
/// Not idempotent: `escape_html("&lt;")` is `"&amp;lt;"`.
pub fn escape_html(html: &str) -> String {
    HTML_ESCAPES
        .iter()
        .fold(html.to_string(), |acc, (from, to)| acc.replace(*from, to))
}

/// Highlight rendering options, deserializable from host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightOptions {
    /// Class attribute of the wrapping span (default: `HIGHLIGHT_CLASS`)
    pub class_name: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions {
            class_name: HIGHLIGHT_CLASS.to_string(),
        }
    }
}

impl HighlightOptions {
    /// Wrap `s` in the highlight span. No escaping.
    pub fn wrap(&self, s: &str) -> String {
        format!("<span class=\"{}\">{}</span>", self.class_name, s)
    }
}

/// Wrap `s` in the default highlight span. No escaping: see `highlight_text`.
pub fn highlighter(s: &str) -> String {
    HighlightOptions::default().wrap(s)
}

/// Escape `text` and highlight every occurrence of `terms` in it.
///
/// # Example
///
/// ```
/// use notemark::highlight_text;
///
/// let html = highlight_text("a <b> tag", &["<b>"]);
/// assert_eq!(
///     html,
///     r#"a <span class="search-result-file-matched-text">&lt;b&gt;</span> tag"#
/// );
/// ```
pub fn highlight_text<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    highlight_text_with(text, terms, &HighlightOptions::default())
}

/// `highlight_text` with explicit options.
pub fn highlight_text_with<S: AsRef<str>>(
    text: &str,
    terms: &[S],
    options: &HighlightOptions,
) -> String {
    let spans = get_all_term_indices(text, terms);
    let mut out = String::with_capacity(text.len() + spans.len() * 48);
    let mut cursor = 0usize;

    for span in &spans {
        out.push_str(&escape_html(&text[cursor..span.index]));
        out.push_str(&options.wrap(&escape_html(&span.matched)));
        cursor = span.end();
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}
