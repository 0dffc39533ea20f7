//! Heading extraction from host metadata caches.

use super::common::{make_cache, HOST_CACHE_JSON};
use notemark::{extract_headings_from_cache, CachedMetadata};

#[test]
fn test_extract_level_one() {
    let cache = make_cache(&[(1, "A"), (2, "B"), (1, "C")]);
    assert_eq!(extract_headings_from_cache(&cache, 1), vec!["A", "C"]);
}

#[test]
fn test_extract_from_host_json() {
    let cache = CachedMetadata::from_json(HOST_CACHE_JSON).unwrap();
    assert_eq!(
        extract_headings_from_cache(&cache, 1),
        vec!["Overview", "Appendix"]
    );
    assert_eq!(extract_headings_from_cache(&cache, 2), vec!["Goals", "Risks"]);
    assert!(extract_headings_from_cache(&cache, 3).is_empty());
}

#[test]
fn test_extract_without_headings_field() {
    let cache = CachedMetadata::from_json(r#"{"links": []}"#).unwrap();
    assert!(extract_headings_from_cache(&cache, 1).is_empty());
}

#[test]
fn test_cache_is_not_modified() {
    let cache = make_cache(&[(1, "A"), (2, "B")]);
    let before = cache.clone();
    let _ = extract_headings_from_cache(&cache, 1);
    assert_eq!(cache, before);
}
