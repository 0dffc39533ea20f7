// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text cleanup before anything gets searched or displayed.
//!
//! Notes arrive as raw markdown: YAML front matter on top, a line or two of
//! `[[wikilinks]]` before the real first sentence, mixed line endings. These
//! helpers slice that into something a result list can show: a title line,
//! a flattened description, a body without metadata.
//!
//! Lines are split on hard breaks *and* on sentence ends (`.`, `?`, `!`
//! followed by whitespace), so a one-paragraph note still yields a short
//! title. Fragments of two UTF-16 units or fewer are noise and get dropped.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Fragments must be longer than this (in UTF-16 code units) to count as a line.
const MIN_LINE_UNITS: usize = 2;

/// Joiner used when flattening lines into a single sentence.
const FLATTEN_SEPARATOR: &str = ". ";

/// Hard line breaks, or a sentence terminator followed by a space or a break.
static LINE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|\r|[.?!](?: |\r?\n|\r)").unwrap());

/// A line that is nothing but a wikilink (or an `![[embed]]`).
static WIKILINK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!?\[\[[^\]]+\]\]$").unwrap());

/// YAML front matter anchored at the start of the text.
static FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)\A---\s*\n.*?\n?^---\s?").unwrap());

/// Split text into meaningful lines.
///
/// # Example
///
/// ```
/// use notemark::split_lines;
///
/// assert_eq!(split_lines("a\nbb\nccc"), vec!["ccc"]);
/// assert_eq!(split_lines("First one. Second one"), vec!["First one", "Second one"]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_SPLIT
        .split(text)
        .filter(|line| line.encode_utf16().count() > MIN_LINE_UNITS)
        .collect()
}

/// Whether a line consists solely of a wikilink reference.
pub fn is_wikilink_line(line: &str) -> bool {
    WIKILINK_LINE.is_match(line)
}

/// Index of the "title" line: the first line that isn't a wikilink.
///
/// Falls back to 0 when every line is a wikilink (or there are no lines),
/// so callers always get an index they can use.
pub fn get_title_line_index<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .position(|line| !is_wikilink_line(line.as_ref()))
        .unwrap_or(0)
}

/// The "title" line of a text, or `None` if nothing survives the split.
pub fn get_title_line(text: &str) -> Option<&str> {
    let lines = split_lines(text.trim());
    lines.get(get_title_line_index(&lines)).copied()
}

/// Drop the title line and flatten the rest into one `". "`-joined sentence.
///
/// Lossy on purpose: original line breaks are not preserved.
pub fn remove_title_line(text: &str) -> String {
    let mut lines = split_lines(text.trim());
    if !lines.is_empty() {
        let index = get_title_line_index(&lines);
        lines.remove(index);
    }
    lines.join(FLATTEN_SEPARATOR)
}

/// Strip a leading YAML front matter block. Text without one is returned as-is.
pub fn remove_front_matter(text: &str) -> Cow<'_, str> {
    FRONT_MATTER.replace(text, "")
}
