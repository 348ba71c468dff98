//! BM25 round trips through built artifacts.

use crate::common::{sample_posts, three_doc_corpus};
use folio::{build_from_posts, search, search_hits, OutputFormat, MAX_RESULTS};

#[test]
fn test_v3_round_trip_single_match() {
    let artifact = build_from_posts(&three_doc_corpus(), OutputFormat::V3);
    let hits = search_hits(&artifact, "dawn", MAX_RESULTS);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].meta.slug, "birds");
    assert!(hits[0].score > 0.0);
}

#[test]
fn test_vocab_miss_returns_empty() {
    let artifact = build_from_posts(&three_doc_corpus(), OutputFormat::V3);
    assert!(search(&artifact, "zeppelin").is_empty());
}

#[test]
fn test_stop_word_query_never_matches() {
    let artifact = build_from_posts(&three_doc_corpus(), OutputFormat::V3);
    assert!(search(&artifact, "the").is_empty());
    assert!(search(&artifact, "of the at").is_empty());
}

#[test]
fn test_blank_queries_return_empty() {
    let artifact = build_from_posts(&three_doc_corpus(), OutputFormat::V3);
    assert!(search(&artifact, "").is_empty());
    assert!(search(&artifact, "   \t ").is_empty());
    assert!(search(&artifact, "!!! ?").is_empty());
}

#[test]
fn test_query_is_case_and_punctuation_insensitive() {
    let artifact = build_from_posts(&sample_posts(), OutputFormat::V3);
    let plain = search(&artifact, "sourdough");
    let shouted = search(&artifact, "  SOURDOUGH!! ");
    assert_eq!(plain, shouted);
    assert_eq!(plain[0].slug, "sourdough");
}

#[test]
fn test_v2_and_v3_rank_identically() {
    let posts = sample_posts();
    let v2 = build_from_posts(&posts, OutputFormat::V2);
    let v3 = build_from_posts(&posts, OutputFormat::V3);

    for query in ["rust", "travel photography", "author", "patience salt rust"] {
        let a = search_hits(&v2, query, MAX_RESULTS);
        let b = search_hits(&v3, query, MAX_RESULTS);
        assert_eq!(a.len(), b.len(), "query {:?}", query);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.meta.slug, y.meta.slug);
            assert!((x.score - y.score).abs() < 1e-9);
        }
    }
}

#[test]
fn test_summaries_blank_content_and_default_width() {
    let artifact = build_from_posts(&sample_posts(), OutputFormat::V3);
    let results = search(&artifact, "author");
    assert_eq!(results.len(), 3);
    for summary in &results {
        assert_eq!(summary.content, "");
    }
    let iceland = results.iter().find(|s| s.slug == "iceland").unwrap();
    assert_eq!(iceland.width, folio::Width::Large);
    let rust = results.iter().find(|s| s.slug == "learning-rust").unwrap();
    assert_eq!(rust.width, folio::Width::Medium);

    let json = serde_json::to_value(rust).unwrap();
    assert_eq!(json["width"], "medium");
    assert_eq!(json["content"], "");
}

#[test]
fn test_empty_artifact_answers_nothing() {
    let artifact = build_from_posts(&[], OutputFormat::V3);
    assert_eq!(artifact.doc_count(), 0);
    assert!(search(&artifact, "rust").is_empty());
}
