// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Legacy substring search.
//!
//! The oldest artifacts carry no statistics, just a lowercase haystack per
//! post. A post matches when its haystack contains the whole query string.
//! The query is not tokenized, so "rust book" only matches that exact run.

use crate::artifact::LegacyEntry;
use crate::scoring::ranking::Hit;

/// Scan in artifact order. `query` must already be trimmed and lowercased.
pub fn search_legacy<'a>(entries: &'a [LegacyEntry], query: &str, limit: usize) -> Vec<Hit<'a>> {
    entries
        .iter()
        .filter(|entry| entry.h.contains(query))
        .take(limit)
        .map(|entry| Hit {
            score: 0.0,
            meta: &entry.meta,
        })
        .collect()
}
