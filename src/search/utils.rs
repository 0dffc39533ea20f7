// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query parsing lives here: the host passes a raw query string, the
//! locators and replacers want a term list.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A double-quoted phrase, or a run of non-whitespace.
static QUERY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).unwrap());

/// Parse a query string into search terms.
///
/// Whitespace separates terms; `"quoted phrases"` stay whole. Duplicates are
/// dropped case-insensitively, keeping the first spelling seen.
///
/// # Example
///
/// ```
/// use notemark::parse_query;
///
/// let terms = parse_query(r#"rust "borrow checker" Rust"#);
/// assert_eq!(terms, vec!["rust", "borrow checker"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    QUERY_TOKEN
        .captures_iter(query)
        .filter_map(|caps| {
            caps.get(1)
                .map(|phrase| phrase.as_str().trim())
                .or_else(|| caps.get(2).map(|word| word.as_str().trim_matches('"')))
        })
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(term.to_lowercase()))
        .map(str::to_string)
        .collect()
}
