// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the scorer over a fixed corpus, in all
//! three artifact shapes, to check it never panics, never exceeds the cap,
//! and always returns results best-first.

#![no_main]

use std::sync::OnceLock;

use folio::testing::sample_posts;
use folio::{build_from_posts, search_hits, Artifact, OutputFormat, MAX_RESULTS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static ARTIFACTS: OnceLock<Vec<Artifact>> = OnceLock::new();
    let artifacts = ARTIFACTS.get_or_init(|| {
        let posts = sample_posts();
        vec![
            build_from_posts(&posts, OutputFormat::V3),
            build_from_posts(&posts, OutputFormat::V2),
            build_from_posts(&posts, OutputFormat::Legacy),
        ]
    });

    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    for artifact in artifacts {
        let hits = search_hits(artifact, &query, MAX_RESULTS);

        // INVARIANT 1: bounded by the cap and the corpus
        assert!(hits.len() <= MAX_RESULTS.min(artifact.doc_count()));

        // INVARIANT 2: best-first, newer date on ties
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }

        // INVARIANT 3: BM25 hits are strictly positive
        if !matches!(artifact, Artifact::Legacy(_)) {
            assert!(hits.iter().all(|h| h.score > 0.0));
        }
    }
});
