// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for multi-term replacement and highlighting.
//!
//! Arbitrary note text, arbitrary user terms. Terms get escaped before they
//! become patterns, so nothing a user types may panic, and every reported
//! span has to slice back out of the text it came from.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notemark::{escape_html, get_all_term_indices, highlight_text, replace_all};

#[derive(Debug, Arbitrary)]
struct ReplaceInput {
    text: String,
    terms: Vec<String>,
}

/// Truncate to at most `max` bytes on a char boundary.
fn cap(s: &str, max: usize) -> &str {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fuzz_target!(|input: ReplaceInput| {
    let text = cap(&input.text, 2000);
    let terms: Vec<&str> = input.terms.iter().take(8).map(|t| cap(t, 32)).collect();

    // INVARIANT 1: identity transform is a no-op
    let same = replace_all(text, &terms, |m| m.to_string());
    assert_eq!(same, text);

    // INVARIANT 2: spans are valid and disjoint
    let spans = get_all_term_indices(text, &terms);
    for m in &spans {
        assert_eq!(text.get(m.index..m.end()), Some(m.matched.as_str()));
    }
    for pair in spans.windows(2) {
        assert!(pair[0].end() <= pair[1].index);
    }

    // INVARIANT 3: stripping the markup gives back the escaped text
    let html = highlight_text(text, &terms);
    let stripped = html
        .replace("<span class=\"search-result-file-matched-text\">", "")
        .replace("</span>", "");
    assert_eq!(stripped, escape_html(text));
});
