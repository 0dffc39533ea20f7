// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match location: turning a pattern (or a bag of terms) into positions.
//!
//! `get_all_indices` is the single-pattern primitive. The regex engine
//! advances past each match before searching again, so results never overlap
//! and come out in ascending order for free.
//!
//! `get_all_term_indices` does the multi-term version in one go. Every term
//! is matched against the *original* text (not a rewritten one), then the
//! spans are resolved: at each start offset the longest match wins, and
//! anything overlapping an already-kept span is dropped. This is what the
//! highlight pipeline renders from, so two terms can never nest their markup.

use regex::Regex;
use tracing::{debug, trace};

use super::replace::compile_term;
use crate::contracts::{check_matches_ascending, check_matches_disjoint};
use crate::types::SearchMatch;

/// Positions of every occurrence of `pattern` inside `text`.
///
/// Ordered by strictly ascending `index`. Occurrences that don't map back
/// onto `text` are dropped rather than reported.
///
/// # Example
///
/// ```
/// use notemark::get_all_indices;
/// use regex::Regex;
///
/// let re = Regex::new("(?i)cat").unwrap();
/// let matches = get_all_indices("Cat and cat", &re);
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].matched, "Cat");
/// assert_eq!(matches[1].index, 8);
/// ```
pub fn get_all_indices(text: &str, pattern: &Regex) -> Vec<SearchMatch> {
    let matches: Vec<SearchMatch> = pattern
        .find_iter(text)
        .filter_map(|m| {
            let found = SearchMatch::at(text, m.start(), m.end());
            if found.is_none() {
                trace!(start = m.start(), end = m.end(), "dropping match with invalid offset");
            }
            found
        })
        .collect();

    check_matches_ascending(text, &matches);
    matches
}

/// Non-overlapping positions of every term, matched case-insensitively.
///
/// Empty terms are ignored. Where two terms start at the same offset the
/// longer one is kept; where spans overlap, the one that starts first wins.
pub fn get_all_term_indices<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<SearchMatch> {
    let mut candidates: Vec<SearchMatch> = Vec::new();

    for term in terms.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
        match compile_term(term) {
            Ok(pattern) => candidates.extend(get_all_indices(text, &pattern)),
            Err(e) => tracing::warn!(error = %e, "skipping term"),
        }
    }

    candidates.sort_by(|a, b| {
        a.index
            .cmp(&b.index)
            .then_with(|| b.matched.len().cmp(&a.matched.len()))
    });

    let total = candidates.len();
    let mut kept: Vec<SearchMatch> = Vec::with_capacity(total);
    let mut covered_until = 0usize;
    for candidate in candidates {
        if candidate.matched.is_empty() || candidate.index < covered_until {
            continue;
        }
        covered_until = candidate.end();
        kept.push(candidate);
    }

    debug!(candidates = total, kept = kept.len(), "resolved term spans");
    check_matches_ascending(text, &kept);
    check_matches_disjoint(&kept);
    kept
}
