// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Artifact decoding under adversarial input.
//!
//! The engine fetches the artifact over HTTP, so a misconfigured origin can
//! hand it an HTML error page, a truncated file, or JSON of the wrong shape.
//! Decoding and validation must return errors for all of it, and searching
//! a decoded artifact must never panic even when validation fails.

#![no_main]

use folio::{search_hits, Artifact, MAX_RESULTS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(artifact) = Artifact::from_slice(data) else {
        return;
    };

    // Validation must terminate with Ok or Err, never panic.
    let valid = artifact.validate().is_ok();

    // Searching must be safe on unvalidated artifacts too.
    for query in ["a", "rust", "post about", "zz 00"] {
        let hits = search_hits(&artifact, query, MAX_RESULTS);
        assert!(hits.len() <= MAX_RESULTS);
        assert!(hits.len() <= artifact.doc_count());
        if valid {
            assert!(hits.iter().all(|h| h.score >= 0.0));
        }
    }

    // A decoded artifact re-encodes and decodes to the same shape.
    if let Ok(bytes) = artifact.to_vec() {
        let again = Artifact::from_slice(&bytes).expect("re-encoded artifact must decode");
        assert_eq!(again.kind(), artifact.kind());
        assert_eq!(again.doc_count(), artifact.doc_count());
    }
});
