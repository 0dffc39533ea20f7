//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{CachedMetadata, HeadingCache};

/// Build a heading cache from `(level, text)` pairs.
pub fn make_cache(headings: &[(u8, &str)]) -> CachedMetadata {
    CachedMetadata::new(
        headings
            .iter()
            .map(|(level, heading)| HeadingCache {
                heading: heading.to_string(),
                level: *level,
            })
            .collect(),
    )
}

/// A note with front matter, a wikilink preamble and a few sentences.
pub fn sample_note() -> String {
    [
        "---",
        "tags: [meeting]",
        "aliases:",
        "  - standup",
        "---",
        "[[Daily Notes]]",
        "Weekly standup",
        "We reviewed the category filters. The cat picture bug is fixed!",
        "Next: ship <b>search</b> & highlight",
    ]
    .join("\n")
}
