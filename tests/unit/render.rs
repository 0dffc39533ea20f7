//! HTML escaping and the escape-then-highlight pipeline.

use super::common::{sample_note, span};
use notemark::{
    escape_html, highlight_text, highlight_text_with, highlighter, parse_query, remove_front_matter,
    HighlightOptions,
};

#[test]
fn test_escape_html_tag() {
    assert_eq!(escape_html("<b>"), "&lt;b&gt;");
}

#[test]
fn test_escape_html_twice_differs() {
    let once = escape_html("<b>");
    let twice = escape_html(&once);
    assert_ne!(once, twice);
    assert_eq!(twice, "&amp;lt;b&amp;gt;");
}

#[test]
fn test_escape_html_quotes() {
    assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#039;s");
}

#[test]
fn test_highlighter_is_raw() {
    assert_eq!(highlighter("a&b"), span("a&b"));
}

#[test]
fn test_highlight_text_matched_markup_is_escaped() {
    assert_eq!(
        highlight_text("use <div> here", &["<div>"]),
        format!("use {} here", span("&lt;div&gt;"))
    );
}

#[test]
fn test_highlight_text_ampersand_term() {
    assert_eq!(
        highlight_text("R&D and r&d", &["r&d"]),
        format!("{} and {}", span("R&amp;D"), span("r&amp;d"))
    );
}

#[test]
fn test_highlight_text_quote_term_inside_entity() {
    // "quot" must only hit the literal word, not the &quot; entities
    assert_eq!(
        highlight_text(r#""quot""#, &["quot"]),
        format!("&quot;{}&quot;", span("quot"))
    );
}

#[test]
fn test_highlight_text_sample_note() {
    let body = remove_front_matter(&sample_note()).into_owned();
    let html = highlight_text(&body, &parse_query("search highlight"));
    assert!(html.contains(&format!("&lt;b&gt;{}&lt;/b&gt;", span("search"))));
    assert!(html.contains(&format!("&amp; {}", span("highlight"))));
}

#[test]
fn test_highlight_text_custom_class() {
    let options = HighlightOptions {
        class_name: "hit".to_string(),
    };
    assert_eq!(
        highlight_text_with("a b", &["b"], &options),
        "a <span class=\"hit\">b</span>"
    );
}
