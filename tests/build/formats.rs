//! Shape of the emitted artifacts.

use crate::common::{sample_posts, three_doc_corpus};
use folio::{build_from_posts, Artifact, ArtifactKind, OutputFormat};
use serde_json::Value;

#[test]
fn test_v3_json_layout() {
    let artifact = build_from_posts(&three_doc_corpus(), OutputFormat::V3);
    let json: Value = serde_json::from_slice(&artifact.to_vec().unwrap()).unwrap();

    assert_eq!(json["v"], 3);
    assert_eq!(json["N"], 3);
    assert!(json["avdl"].as_f64().unwrap() > 0.0);
    let vocab = json["vocab"].as_object().unwrap();
    assert_eq!(json["df"].as_array().unwrap().len(), vocab.len());
    assert_eq!(json["postings"].as_array().unwrap().len(), vocab.len());

    let doc = &json["docs"][0];
    assert_eq!(doc["m"]["slug"], "cats");
    assert!(doc["dl"].as_u64().unwrap() > 0);
    assert!(doc.get("t").is_none());
    assert!(doc["m"].get("content").is_none());
}

#[test]
fn test_v2_json_layout() {
    let artifact = build_from_posts(&three_doc_corpus(), OutputFormat::V2);
    let json: Value = serde_json::from_slice(&artifact.to_vec().unwrap()).unwrap();

    assert_eq!(json["v"], 2);
    assert!(json.get("postings").is_none());
    let t = json["docs"][1]["t"].as_array().unwrap();
    assert_eq!(t.len() % 2, 0);
}

#[test]
fn test_legacy_json_layout() {
    let artifact = build_from_posts(&sample_posts(), OutputFormat::Legacy);
    let json: Value = serde_json::from_slice(&artifact.to_vec().unwrap()).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["slug"], "learning-rust");
    let h = entries[0]["h"].as_str().unwrap();
    assert!(h.starts_with("learning rust test author programming rust"));
    assert_eq!(h, h.to_lowercase());
}

#[test]
fn test_every_format_validates_and_reloads() {
    for (format, kind) in [
        (OutputFormat::V3, ArtifactKind::V3),
        (OutputFormat::V2, ArtifactKind::V2),
        (OutputFormat::Legacy, ArtifactKind::Legacy),
    ] {
        let artifact = build_from_posts(&sample_posts(), format);
        assert!(artifact.validate().is_ok(), "{} should validate", kind);

        let reloaded = Artifact::from_slice(&artifact.to_vec().unwrap()).unwrap();
        assert_eq!(reloaded.kind(), kind);
        assert_eq!(reloaded.doc_count(), artifact.doc_count());
        assert_eq!(reloaded.vocab_len(), artifact.vocab_len());
    }
}

#[test]
fn test_vocab_serialized_in_id_order() {
    let artifact = build_from_posts(&three_doc_corpus(), OutputFormat::V3);
    let text = String::from_utf8(artifact.to_vec().unwrap()).unwrap();
    let Artifact::V3(index) = &artifact else {
        panic!("expected v3");
    };

    let mut by_id: Vec<(&String, &u32)> = index.vocab.iter().collect();
    by_id.sort_by_key(|(_, id)| **id);
    let positions: Vec<usize> = by_id
        .iter()
        .map(|(token, _)| text.find(&format!("\"{}\":", token)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
