// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25 over the v2 (forward) and v3 (inverted) artifacts.
//!
//! Both strategies resolve query tokens against the vocabulary the same way
//! and accumulate the same per-term contribution from `scoring`. They differ
//! only in how a document's term frequency is found:
//!
//! - v3 walks `postings[tokenId]`, touching only matching documents.
//! - v2 scans every document's `t` pairs for every query term. That is
//!   O(docs × doc_terms × query_terms), kept for reading old artifacts.
//!
//! Unknown query tokens are dropped. Duplicated query tokens contribute once
//! per occurrence.

use std::collections::HashMap;

use crate::artifact::{ForwardIndex, InvertedIndex};
use crate::scoring::ranking::{rank, Hit};
use crate::scoring::{idf, term_score};
use crate::types::DocMeta;

/// A query token that exists in the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryTerm {
    pub token_id: u32,
    pub idf: f64,
}

/// Map query tokens to vocab ids and their IDF, dropping unknown tokens.
pub fn resolve_terms(
    vocab: &HashMap<String, u32>,
    df: &[u32],
    n: u32,
    tokens: &[String],
) -> Vec<QueryTerm> {
    tokens
        .iter()
        .filter_map(|token| vocab.get(token))
        .map(|&token_id| QueryTerm {
            token_id,
            idf: idf(n, df.get(token_id as usize).copied().unwrap_or(0)),
        })
        .collect()
}

/// v3: accumulate scores by walking posting lists.
pub fn search_inverted<'a>(index: &'a InvertedIndex, tokens: &[String], limit: usize) -> Vec<Hit<'a>> {
    let terms = resolve_terms(&index.vocab, &index.df, index.n, tokens);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scores = vec![0.0f64; index.docs.len()];
    for term in &terms {
        let Some(list) = index.postings.get(term.token_id as usize) else {
            continue;
        };
        for pair in list.chunks_exact(2) {
            let (doc_id, tf) = (pair[0] as usize, pair[1]);
            if let (Some(doc), Some(score)) = (index.docs.get(doc_id), scores.get_mut(doc_id)) {
                *score += term_score(term.idf, tf, doc.dl, index.avdl);
            }
        }
    }

    collect_hits(scores, index.docs.iter().map(|d| &d.m), limit)
}

/// v2: accumulate scores by scanning each document's forward pairs.
pub fn search_forward<'a>(index: &'a ForwardIndex, tokens: &[String], limit: usize) -> Vec<Hit<'a>> {
    let terms = resolve_terms(&index.vocab, &index.df, index.n, tokens);
    if terms.is_empty() {
        return Vec::new();
    }

    let scores: Vec<f64> = index
        .docs
        .iter()
        .map(|doc| {
            terms
                .iter()
                .filter_map(|term| {
                    doc.t
                        .chunks_exact(2)
                        .find(|pair| pair[0] == term.token_id)
                        .map(|pair| term_score(term.idf, pair[1], doc.dl, index.avdl))
                })
                .sum::<f64>()
        })
        .collect();

    collect_hits(scores, index.docs.iter().map(|d| &d.m), limit)
}

fn collect_hits<'a>(
    scores: Vec<f64>,
    metas: impl Iterator<Item = &'a DocMeta>,
    limit: usize,
) -> Vec<Hit<'a>> {
    let hits = scores
        .into_iter()
        .zip(metas)
        .filter(|(score, _)| *score > 0.0)
        .map(|(score, meta)| Hit { score, meta })
        .collect();
    rank(hits, limit)
}
