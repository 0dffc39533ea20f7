// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-match extraction and multi-term replacement.
//!
//! Locating answers "where are the hits", replacing answers "rewrite the
//! hits". Both escape terms before compiling, so any user query is safe to
//! pass straight through.

pub mod locate;
pub mod replace;
pub mod utils;

pub use locate::{get_all_indices, get_all_term_indices};
pub use replace::{compile_term, escape_regex, replace_all, TermPatterns};
pub use utils::parse_query;
