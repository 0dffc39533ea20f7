//! Text annotation for note search: titles, front matter, term highlighting.
//!
//! Takes raw note text and a search query, gives back what a result list
//! needs: a title line, a flattened description, match positions, and
//! escaped HTML with the hits wrapped in highlight spans.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │ normalize.rs │────▶│ search/          │────▶│  render.rs  │
//! │ (lines,      │     │  locate.rs       │     │ (escape,    │
//! │  title,      │     │  replace.rs      │     │  highlight) │
//! │  front matter)     │  utils.rs        │     │             │
//! └──────────────┘     └──────────────────┘     └─────────────┘
//!
//! ┌──────────────┐
//! │ headings.rs  │  (independent: reads a pre-built metadata cache)
//! └──────────────┘
//! ```
//!
//! Everything is a pure function of its arguments. The only async piece is
//! `wait`, a timer for callers that throttle their own searches.
//!
//! # Usage
//!
//! ```
//! use notemark::{get_title_line, highlight_text, parse_query, remove_front_matter};
//!
//! let note = "---\ntags: [x]\n---\n[[Home]]\nGroceries\nMilk & eggs";
//! let body = remove_front_matter(note);
//! assert_eq!(get_title_line(&body), Some("Groceries"));
//!
//! let terms = parse_query("eggs");
//! let html = highlight_text("Milk & eggs", &terms);
//! assert_eq!(
//!     html,
//!     r#"Milk &amp; <span class="search-result-file-matched-text">eggs</span>"#
//! );
//! ```

pub mod contracts;
mod error;
mod headings;
mod normalize;
mod render;
pub mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::MarkupError;
pub use headings::extract_headings_from_cache;
pub use normalize::{
    get_title_line, get_title_line_index, is_wikilink_line, remove_front_matter,
    remove_title_line, split_lines,
};
pub use render::{
    escape_html, highlight_text, highlight_text_with, highlighter, HighlightOptions,
    HIGHLIGHT_CLASS,
};
pub use search::{
    compile_term, escape_regex, get_all_indices, get_all_term_indices, parse_query, replace_all,
    TermPatterns,
};
pub use types::{CachedMetadata, HeadingCache, SearchMatch};
pub use utils::wait;
