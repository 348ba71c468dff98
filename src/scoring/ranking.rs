// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get ordered and cut.
//!
//! Higher score first. Equal scores fall back to the newer post, comparing the
//! ISO-8601 `date` strings lexically. The sort is stable, so anything still
//! tied keeps document order.

use std::cmp::Ordering;

use crate::types::DocMeta;

/// Hard cap on results per query.
pub const MAX_RESULTS: usize = 50;

/// A document with its accumulated BM25 score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    pub score: f64,
    pub meta: &'a DocMeta,
}

/// Compare two hits for ranking. `Less` means `a` ranks first.
pub fn compare_hits(a: &Hit<'_>, b: &Hit<'_>) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(Ordering::Equal) | None => b.meta.date.cmp(&a.meta.date),
        Some(ord) => ord,
    }
}

/// Sort hits best-first and keep at most `limit`.
pub fn rank(mut hits: Vec<Hit<'_>>, limit: usize) -> Vec<Hit<'_>> {
    hits.sort_by(compare_hits);
    hits.truncate(limit);
    hits
}
