// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-term rewriting: run every term over the text, one pass per term.
//!
//! Terms are escaped, compiled case-insensitively, and applied shortest
//! first. Each pass sees the output of the previous one.
//!
//! # Overlapping terms
//!
//! Shortest-first is *not* longest-match-first. With `["cat", "category"]`
//! the `cat` pass rewrites the front of "category", and the `category` pass
//! then matches the half-rewritten word again:
//!
//! ```text
//! "The cat is a category"
//!   cat      -> "The CAT is a CATegory"
//!   category -> "The CAT is a CATEGORY"
//! ```
//!
//! With a wrapping transform that means nested markup. Callers that render
//! HTML should use `highlight_text`, which resolves spans up front.

use regex::{Captures, Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::MarkupError;

/// Escape every regex metacharacter in `term` so it matches literally.
pub fn escape_regex(term: &str) -> String {
    regex::escape(term)
}

/// Compile one term into a case-insensitive literal pattern.
pub fn compile_term(term: &str) -> Result<Regex, MarkupError> {
    RegexBuilder::new(&escape_regex(term))
        .case_insensitive(true)
        .build()
        .map_err(|source| MarkupError::Pattern {
            term: term.to_string(),
            source,
        })
}

/// A compiled, ordered term set.
///
/// Scoped to one request: build it from the query's terms, reuse it across
/// the notes of that request, drop it. Nothing is cached between requests.
#[derive(Debug, Clone, Default)]
pub struct TermPatterns {
    patterns: Vec<Regex>,
}

impl TermPatterns {
    /// Compile `terms`, shortest first (stable for equal lengths).
    ///
    /// Length is counted in UTF-16 code units, the unit the JS host sorts by.
    /// An empty term is kept and matches at every position. Terms that fail
    /// to compile are logged and skipped.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        let mut ordered: Vec<&str> = terms.iter().map(AsRef::as_ref).collect();
        ordered.sort_by_key(|t| t.encode_utf16().count());

        let patterns = ordered
            .into_iter()
            .filter_map(|term| match compile_term(term) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(error = %e, "skipping term");
                    None
                }
            })
            .collect();

        TermPatterns { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Rewrite every occurrence of every term, one pass per term.
    ///
    /// `transform` receives the exact matched text, original case intact.
    pub fn replace_all<F>(&self, text: &str, mut transform: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        debug!(terms = self.patterns.len(), len = text.len(), "replacing terms");

        let mut out = text.to_string();
        for pattern in &self.patterns {
            out = pattern
                .replace_all(&out, |caps: &Captures<'_>| transform(&caps[0]))
                .into_owned();
        }
        out
    }
}

/// Rewrite every occurrence of every term in `text` through `transform`.
///
/// The caller's term slice is left untouched; ordering happens on a copy.
///
/// # Example
///
/// ```
/// use notemark::replace_all;
///
/// let out = replace_all("Hello world", &["WORLD"], |m| format!("[{m}]"));
/// assert_eq!(out, "Hello [world]");
/// ```
pub fn replace_all<S, F>(text: &str, terms: &[S], transform: F) -> String
where
    S: AsRef<str>,
    F: FnMut(&str) -> String,
{
    if terms.is_empty() {
        return text.to_string();
    }
    TermPatterns::new(terms).replace_all(text, transform)
}
