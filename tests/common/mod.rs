//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;

use folio::{Artifact, InputSource, Post};
use tempfile::TempDir;

// Re-export canonical fixtures from folio::testing
pub use folio::testing::{make_post, posts_mentioning, sample_posts, CountingSource, FailingSource};

/// Write posts as a JSON array into `dir/posts.json`.
pub fn write_posts_file(dir: &TempDir, posts: &[Post]) -> InputSource {
    let path = dir.path().join("posts.json");
    std::fs::write(&path, serde_json::to_vec(posts).unwrap()).unwrap();
    InputSource::File(path)
}

/// Write raw JSON text into `dir/posts.json`.
pub fn write_raw_posts(dir: &TempDir, json: &str) -> InputSource {
    let path = dir.path().join("posts.json");
    std::fs::write(&path, json).unwrap();
    InputSource::File(path)
}

pub fn output_path(dir: &TempDir) -> PathBuf {
    dir.path().join("public").join("search-index.json")
}

pub fn read_artifact(path: &PathBuf) -> Artifact {
    Artifact::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

/// Slugs of a result list, in order.
pub fn slugs<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|s| s.as_ref().to_string()).collect()
}

/// The three-document corpus used by the round-trip checks.
pub fn three_doc_corpus() -> Vec<Post> {
    vec![
        make_post("cats", "Cats", "2021-01-01", "cats sleep most of the day"),
        make_post("dogs", "Dogs", "2022-01-01", "dogs chase the ball"),
        make_post("birds", "Birds", "2023-01-01", "birds sing at dawn"),
    ]
}
