// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that crosses the crate boundary.
//!
//! Everything here is transient: built per call from caller input, dropped
//! when the call returns. The heading cache is produced by the host's
//! metadata indexer and is only ever read.
//!
//! # Invariants
//!
//! - **SearchMatch**: `index + match.len() <= text.len()` and
//!   `text[index..index + match.len()] == match`. Offsets are byte offsets.
//!   Use `SearchMatch::at` to build one from raw offsets; it refuses
//!   anything that does not land on the source text.

use serde::{Deserialize, Serialize};

use crate::error::MarkupError;

/// A located occurrence of a term or pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchMatch {
    /// The exact matched substring, original case preserved.
    #[serde(rename = "match")]
    pub matched: String,
    /// Byte offset into the source text where `matched` begins.
    pub index: usize,
}

impl SearchMatch {
    /// Build a match for `text[start..end]`.
    ///
    /// Returns `None` if the range is inverted, out of bounds, or splits a
    /// UTF-8 character.
    pub fn at(text: &str, start: usize, end: usize) -> Option<Self> {
        if start > end {
            return None;
        }
        text.get(start..end).map(|slice| SearchMatch {
            matched: slice.to_string(),
            index: start,
        })
    }

    /// Byte offset one past the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.index + self.matched.len()
    }

    /// Check the match against the text it claims to come from.
    pub fn is_valid_for(&self, text: &str) -> bool {
        text.get(self.index..self.end()) == Some(self.matched.as_str())
    }
}

/// One heading record from the host's metadata cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCache {
    /// Heading text without the leading `#` markers.
    pub heading: String,
    /// 1 for `#`, 6 for `######`.
    pub level: u8,
}

/// Precomputed metadata for one note.
///
/// Only the headings are modelled. Whatever else the indexer puts in the
/// mapping (links, tags, positions) is ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<HeadingCache>>,
}

impl CachedMetadata {
    pub fn new(headings: Vec<HeadingCache>) -> Self {
        CachedMetadata {
            headings: Some(headings),
        }
    }

    /// Parse the JSON mapping the host indexer hands over.
    pub fn from_json(json: &str) -> Result<Self, MarkupError> {
        Ok(serde_json::from_str(json)?)
    }
}
