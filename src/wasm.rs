//! WebAssembly bindings for JavaScript hosts.
//!
//! The plugin side keeps its camelCase API (`escapeHTML`, `replaceAll`, ...)
//! and calls straight into the Rust implementations. Term lists, match lists
//! and heading caches cross the boundary through serde-wasm-bindgen.

use crate::types::CachedMetadata;
use crate::{
    escape_html, extract_headings_from_cache, get_all_indices, get_all_term_indices,
    get_title_line, highlight_text_with, highlighter, remove_front_matter, remove_title_line,
    replace_all, split_lines, HighlightOptions,
};
use regex::Regex;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The global `String(value)` conversion.
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Stringify a callback result the way `String.prototype.replace` does.
fn coerce_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| js_string(value))
}

fn terms_from(value: JsValue) -> Result<Vec<String>, JsValue> {
    Ok(from_value(value).map_err(|e| e.to_string())?)
}

#[wasm_bindgen(js_name = escapeHTML)]
pub fn escape_html_js(html: &str) -> String {
    escape_html(html)
}

#[wasm_bindgen(js_name = highlighter)]
pub fn highlighter_js(s: &str) -> String {
    highlighter(s)
}

/// Escape and highlight in one step. `options` may be `undefined`.
#[wasm_bindgen(js_name = highlightText)]
pub fn highlight_text_js(text: &str, terms: JsValue, options: JsValue) -> Result<String, JsValue> {
    let terms = terms_from(terms)?;
    let options: HighlightOptions = if options.is_undefined() || options.is_null() {
        HighlightOptions::default()
    } else {
        from_value(options).map_err(|e| e.to_string())?
    };
    Ok(highlight_text_with(text, &terms, &options))
}

#[wasm_bindgen(js_name = splitLines)]
pub fn split_lines_js(text: &str) -> Result<JsValue, JsValue> {
    Ok(to_value(&split_lines(text))?)
}

#[wasm_bindgen(js_name = getTitleLine)]
pub fn get_title_line_js(text: &str) -> Option<String> {
    get_title_line(text).map(str::to_string)
}

#[wasm_bindgen(js_name = removeTitleLine)]
pub fn remove_title_line_js(text: &str) -> String {
    remove_title_line(text)
}

#[wasm_bindgen(js_name = removeFrontMatter)]
pub fn remove_front_matter_js(text: &str) -> String {
    remove_front_matter(text).into_owned()
}

/// Match positions for a pattern source string (Rust regex syntax).
#[wasm_bindgen(js_name = getAllIndices)]
pub fn get_all_indices_js(text: &str, pattern: &str) -> Result<JsValue, JsValue> {
    let pattern = Regex::new(pattern).map_err(|e| e.to_string())?;
    Ok(to_value(&get_all_indices(text, &pattern))?)
}

#[wasm_bindgen(js_name = getAllTermIndices)]
pub fn get_all_term_indices_js(text: &str, terms: JsValue) -> Result<JsValue, JsValue> {
    let terms = terms_from(terms)?;
    Ok(to_value(&get_all_term_indices(text, &terms))?)
}

/// Rewrite every term occurrence through a JS callback `(match) => string`.
///
/// A callback that throws aborts the call with that exception. A callback
/// returning a non-string leaves the match as it was.
#[wasm_bindgen(js_name = replaceAll)]
pub fn replace_all_js(text: &str, terms: JsValue, cb: &js_sys::Function) -> Result<String, JsValue> {
    let terms = terms_from(terms)?;
    let mut thrown: Option<JsValue> = None;

    let out = replace_all(text, &terms, |m| {
        if thrown.is_some() {
            return m.to_string();
        }
        match cb.call1(&JsValue::NULL, &JsValue::from_str(m)) {
            Ok(value) => coerce_to_string(&value),
            Err(e) => {
                thrown = Some(e);
                m.to_string()
            }
        }
    });

    match thrown {
        Some(e) => Err(e),
        None => Ok(out),
    }
}

#[wasm_bindgen(js_name = extractHeadingsFromCache)]
pub fn extract_headings_from_cache_js(cache: JsValue, level: u8) -> Result<JsValue, JsValue> {
    let cache: CachedMetadata = if cache.is_undefined() || cache.is_null() {
        CachedMetadata::default()
    } else {
        from_value(cache).map_err(|e| e.to_string())?
    };
    Ok(to_value(&extract_headings_from_cache(&cache, level))?)
}
