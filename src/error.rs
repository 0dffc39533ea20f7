// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the few fallible entry points.
//!
//! Most of the crate is best-effort and never fails: bad terms are skipped,
//! bad offsets are dropped. These variants only surface from the helpers that
//! compile a single term or parse a heading cache from JSON.

use thiserror::Error;

/// Errors raised by `compile_term` and `CachedMetadata::from_json`.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// An escaped term still failed to compile (in practice: size limit).
    #[error("failed to compile pattern for term {term:?}: {source}")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid heading cache: {0}")]
    HeadingCache(#[from] serde_json::Error),
}
