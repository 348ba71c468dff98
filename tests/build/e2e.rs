//! End-to-end tests for the build workflow.

use crate::common::{output_path, read_artifact, sample_posts, write_posts_file, write_raw_posts};
use folio::{run_build, search, ArtifactKind, BuildConfig, BuildError, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_run_build_e2e_basic() {
    let dir = TempDir::new().unwrap();
    let input = write_posts_file(&dir, &sample_posts());
    let output = output_path(&dir);

    let summary = run_build(&BuildConfig::new(input, &output)).unwrap();
    assert_eq!(summary.kind, ArtifactKind::V3);
    assert_eq!(summary.doc_count, 3);
    assert!(summary.rejected.is_empty());

    let artifact = read_artifact(&output);
    let results = search(&artifact, "borrow checker");
    assert_eq!(results[0].slug, "learning-rust");
}

#[test]
fn test_build_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = write_posts_file(&dir, &sample_posts());
    let first = dir.path().join("a.json");
    let second = dir.path().join("b.json");

    let a = run_build(&BuildConfig::new(input.clone(), &first)).unwrap();
    let b = run_build(&BuildConfig::new(input, &second)).unwrap();

    assert_eq!(a.crc32, b.crc32);
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_invalid_input_leaves_previous_artifact() {
    let dir = TempDir::new().unwrap();
    let output = output_path(&dir);
    let good = write_posts_file(&dir, &sample_posts());
    run_build(&BuildConfig::new(good, &output)).unwrap();
    let before = std::fs::read(&output).unwrap();

    let bad = write_raw_posts(&dir, r#"[{"slug": "x", "date": ""}]"#);
    let err = run_build(&BuildConfig::new(bad, &output)).unwrap_err();
    assert!(matches!(err, BuildError::InvalidPosts { count: 1 }));
    assert_eq!(std::fs::read(&output).unwrap(), before);

    let garbage = write_raw_posts(&dir, "not json");
    let err = run_build(&BuildConfig::new(garbage, &output)).unwrap_err();
    assert!(matches!(err, BuildError::Parse { .. }));
    assert_eq!(std::fs::read(&output).unwrap(), before);
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let input = folio::InputSource::File(dir.path().join("absent.json"));
    let err = run_build(&BuildConfig::new(input, output_path(&dir))).unwrap_err();
    assert!(matches!(err, BuildError::Read { .. }));
}

#[test]
fn test_empty_corpus_builds_empty_artifact() {
    let dir = TempDir::new().unwrap();
    let input = write_raw_posts(&dir, "[]");
    let output = output_path(&dir);

    let summary = run_build(&BuildConfig::new(input, &output)).unwrap();
    assert_eq!(summary.doc_count, 0);

    let json: serde_json::Value = serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(json["N"], 1);
    assert_eq!(json["avdl"], 0.0);
    assert!(search(&read_artifact(&output), "anything").is_empty());
}

#[test]
fn test_legacy_format_build() {
    let dir = TempDir::new().unwrap();
    let input = write_posts_file(&dir, &sample_posts());
    let output = output_path(&dir);
    let mut config = BuildConfig::new(input, &output);
    config.format = OutputFormat::Legacy;

    let summary = run_build(&config).unwrap();
    assert_eq!(summary.kind, ArtifactKind::Legacy);
    assert_eq!(summary.vocab_size, 0);

    let results = search(&read_artifact(&output), "sourdough");
    assert_eq!(results[0].slug, "sourdough");
}
