// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heading lookup over the host's precomputed metadata cache.

use crate::types::CachedMetadata;

/// Text of every heading at `level`, in cache order.
///
/// A cache with no `headings` field is treated as having none.
///
/// # Example
///
/// ```
/// use notemark::{extract_headings_from_cache, CachedMetadata, HeadingCache};
///
/// let cache = CachedMetadata::new(vec![
///     HeadingCache { heading: "A".into(), level: 1 },
///     HeadingCache { heading: "B".into(), level: 2 },
/// ]);
/// assert_eq!(extract_headings_from_cache(&cache, 1), vec!["A"]);
/// ```
pub fn extract_headings_from_cache(cache: &CachedMetadata, level: u8) -> Vec<&str> {
    let Some(headings) = cache.headings.as_deref() else {
        return Vec::new();
    };
    headings
        .iter()
        .filter(|h| h.level == level)
        .map(|h| h.heading.as_str())
        .collect()
}
