// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution against a loaded artifact.
//!
//! [`search_hits`] is the single dispatch point: it normalizes the query once
//! and hands it to the strategy matching the artifact shape.
//!
//! | Artifact | Strategy                            | Order             |
//! |----------|-------------------------------------|-------------------|
//! | Legacy   | whole-query substring of `h`        | artifact order    |
//! | v2       | BM25, scan each doc's forward pairs | score, then date  |
//! | v3       | BM25, walk postings per query term  | score, then date  |
//!
//! An empty query, a query with no known terms, and an empty corpus all
//! produce an empty list. None of them is an error.

pub mod bm25;
pub mod legacy;

use crate::artifact::Artifact;
use crate::scoring::ranking::{Hit, MAX_RESULTS};
use crate::tokenize::query_tokens;
use crate::types::PostSummary;

/// Search with the standard result cap.
pub fn search(artifact: &Artifact, query: &str) -> Vec<PostSummary> {
    search_with_limit(artifact, query, MAX_RESULTS)
}

/// Search returning at most `limit` summaries (never more than [`MAX_RESULTS`]).
pub fn search_with_limit(artifact: &Artifact, query: &str, limit: usize) -> Vec<PostSummary> {
    search_hits(artifact, query, limit)
        .into_iter()
        .map(|hit| PostSummary::from(hit.meta))
        .collect()
}

/// Ranked hits with scores. Legacy hits are unscored and carry `0.0`.
pub fn search_hits<'a>(artifact: &'a Artifact, query: &str, limit: usize) -> Vec<Hit<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    let limit = limit.min(MAX_RESULTS);

    match artifact {
        Artifact::Legacy(entries) => legacy::search_legacy(entries, &query, limit),
        Artifact::V2(index) => bm25::search_forward(index, &query_tokens(&query), limit),
        Artifact::V3(index) => bm25::search_inverted(index, &query_tokens(&query), limit),
    }
}
