//! Substring search over bare-array artifacts.

use folio::{search, search_hits, Artifact, ArtifactKind, MAX_RESULTS};

const LEGACY: &str = r#"[
    {"slug": "first", "title": "First", "date": "2020-01-01", "timezone": "UTC", "author": "me", "h": "first post about rust and more"},
    {"slug": "second", "title": "Second", "date": "2024-01-01", "timezone": "UTC", "author": "me", "width": "small", "h": "second post about cooking"},
    {"slug": "third", "title": "Third", "date": "2022-01-01", "timezone": "UTC", "author": "me", "h": "trust me, third post"}
]"#;

fn legacy() -> Artifact {
    let artifact = Artifact::from_slice(LEGACY.as_bytes()).unwrap();
    assert_eq!(artifact.kind(), ArtifactKind::Legacy);
    artifact
}

#[test]
fn test_substring_match_without_scores() {
    let artifact = legacy();
    let hits = search_hits(&artifact, "Rust", MAX_RESULTS);
    // "trust" contains "rust"; legacy matching is raw substring
    let slugs: Vec<&str> = hits.iter().map(|h| h.meta.slug.as_str()).collect();
    assert_eq!(slugs, vec!["first", "third"]);
    assert!(hits.iter().all(|h| h.score == 0.0));
}

#[test]
fn test_artifact_order_not_date_order() {
    let results = search(&legacy(), "post");
    let slugs: Vec<&str> = results.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["first", "second", "third"]);
}

#[test]
fn test_whole_query_must_appear() {
    let artifact = legacy();
    assert_eq!(search(&artifact, "post about").len(), 2);
    assert!(search(&artifact, "about post").is_empty());
}

#[test]
fn test_no_substring_match_is_empty() {
    assert!(search(&legacy(), "zeppelin").is_empty());
}

#[test]
fn test_legacy_summaries() {
    let results = search(&legacy(), "cooking");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].width, folio::Width::Small);
    assert_eq!(results[0].content, "");
}
