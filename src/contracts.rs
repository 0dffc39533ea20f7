// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for match lists.
//!
//! Debug-mode assertions that the locators call on their own output:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure** when an offset drifts off the source text
//!
//! | Contract                     | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_match_valid`          | `text[index..index + len] == match`             |
//! | `check_matches_ascending`    | each `index` strictly greater than the previous |
//! | `check_matches_disjoint`     | each match starts at or after the previous end  |
//!
//! # Usage
//!
//! ```ignore
//! let matches = get_all_indices(text, &pattern);
//! check_matches_ascending(text, &matches);
//! ```

use crate::types::SearchMatch;

/// Check that a match points at its own text inside `text`.
///
/// # Panics (debug builds only)
/// Panics if the slice at `index` is out of range or differs from `matched`.
#[inline]
pub fn check_match_valid(text: &str, m: &SearchMatch) {
    debug_assert!(
        m.is_valid_for(text),
        "Contract violation: SearchMatch.WellFormed - {:?} at {} not found in text of len {}",
        m.matched,
        m.index,
        text.len()
    );
}

/// Check that every match is valid and indices strictly ascend.
#[inline]
pub fn check_matches_ascending(text: &str, matches: &[SearchMatch]) {
    if cfg!(debug_assertions) {
        for m in matches {
            check_match_valid(text, m);
        }
        for pair in matches.windows(2) {
            debug_assert!(
                pair[0].index < pair[1].index,
                "Contract violation: matches not ascending - {} then {}",
                pair[0].index,
                pair[1].index
            );
        }
    }
}

/// Check that no match starts before the previous one ends.
#[inline]
pub fn check_matches_disjoint(matches: &[SearchMatch]) {
    if cfg!(debug_assertions) {
        for pair in matches.windows(2) {
            debug_assert!(
                pair[0].end() <= pair[1].index,
                "Contract violation: matches overlap - [{}, {}) and [{}, ..)",
                pair[0].index,
                pair[0].end(),
                pair[1].index
            );
        }
    }
}
