// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the note normalizer.
//!
//! Whatever bytes a note holds, splitting, title detection and front matter
//! removal must not panic, and their output must respect the line rules.

#![no_main]

use libfuzzer_sys::fuzz_target;
use notemark::{get_title_line, remove_front_matter, remove_title_line, split_lines};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for line in split_lines(&text) {
        assert!(line.encode_utf16().count() > 2);
    }

    if let Some(title) = get_title_line(&text) {
        assert!(text.contains(title));
    }

    let _ = remove_title_line(&text);

    let body = remove_front_matter(&text);
    assert!(body.len() <= text.len());
});
