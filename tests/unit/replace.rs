//! Match location and multi-term replacement.

use super::common::assert_matches_well_formed;
use notemark::{
    compile_term, get_all_indices, get_all_term_indices, parse_query, replace_all, MarkupError,
    TermPatterns,
};
use regex::Regex;

// ============================================================================
// LOCATOR
// ============================================================================

#[test]
fn test_get_all_indices_positions() {
    let text = "one two one two one";
    let re = Regex::new("one").unwrap();
    let matches = get_all_indices(text, &re);
    let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 8, 16]);
    assert_matches_well_formed(text, &matches);
}

#[test]
fn test_get_all_indices_with_compiled_term() {
    let text = "Note: see NOTE and note.";
    let matches = get_all_indices(text, &compile_term("note").unwrap());
    let found: Vec<&str> = matches.iter().map(|m| m.matched.as_str()).collect();
    assert_eq!(found, vec!["Note", "NOTE", "note"]);
    assert_matches_well_formed(text, &matches);
}

#[test]
fn test_get_all_indices_no_match() {
    let re = Regex::new("xyz").unwrap();
    assert!(get_all_indices("abc", &re).is_empty());
    assert!(get_all_indices("", &re).is_empty());
}

#[test]
fn test_get_all_term_indices_from_query() {
    let text = "Weekly standup: review category filters, then the cat bug";
    let terms = parse_query("cat category");
    let matches = get_all_term_indices(text, &terms);
    let found: Vec<&str> = matches.iter().map(|m| m.matched.as_str()).collect();
    assert_eq!(found, vec!["category", "cat"]);
    assert_matches_well_formed(text, &matches);
}

// ============================================================================
// REPLACER
// ============================================================================

#[test]
fn test_replace_all_overlap_regression_baseline() {
    let out = replace_all("The cat is a category", &["cat", "category"], |s| {
        s.to_uppercase()
    });
    assert_eq!(out, "The CAT is a CATEGORY");
}

#[test]
fn test_replace_all_leaves_caller_terms_alone() {
    let terms = vec!["category".to_string(), "cat".to_string()];
    let _ = replace_all("a cat", &terms, |s| s.to_uppercase());
    assert_eq!(terms, vec!["category", "cat"]);
}

#[test]
fn test_replace_all_no_terms() {
    let terms: Vec<String> = Vec::new();
    assert_eq!(replace_all("same", &terms, |s| s.to_uppercase()), "same");
}

#[test]
fn test_replace_all_regex_syntax_in_terms() {
    let out = replace_all("price $5.00 (approx)", &["$5.00", "(approx)"], |s| {
        format!("[{}]", s)
    });
    assert_eq!(out, "price [$5.00] [(approx)]");
}

#[test]
fn test_replace_all_unicode_case() {
    let out = replace_all("ÉCOLE école", &["école"], |s| format!("<{}>", s));
    assert_eq!(out, "<ÉCOLE> <école>");
}

#[test]
fn test_term_patterns_match_free_function() {
    let terms = ["cat", "category"];
    let patterns = TermPatterns::new(&terms);
    let upper = |s: &str| s.to_uppercase();
    assert_eq!(
        patterns.replace_all("The cat is a category", upper),
        replace_all("The cat is a category", &terms, upper)
    );
}

#[test]
fn test_compile_term_never_fails_on_user_input() {
    for term in ["(", "[", "\\", "*", "?", "{2}", "a|b", "^$"] {
        assert!(compile_term(term).is_ok(), "term {:?} should compile", term);
    }
}

#[test]
fn test_pattern_error_names_the_term() {
    let err = MarkupError::Pattern {
        term: "oversized".to_string(),
        source: regex::Error::CompiledTooBig(10),
    };
    let message = err.to_string();
    assert!(message.contains("\"oversized\""), "got: {}", message);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_replace_all_empty_term_runs_its_own_pass() {
    let wrap = |m: &str| format!("<{m}>");
    assert_eq!(replace_all("ab", &[""], wrap), "<>a<>b<>");
    // the empty pass runs first, so "b" then sees the inserted markers
    assert_eq!(replace_all("ab", &["b", ""], wrap), "<>a<><b><>");
}
