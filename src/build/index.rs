// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus statistics and artifact assembly.
//!
//! Vocabulary ids are handed out in first-seen order while walking documents
//! in input order, so the same posts always produce the same bytes. Posting
//! lists come out sorted by document id for free because documents are
//! visited in order.

use std::collections::HashMap;

use crate::artifact::{
    Artifact, ForwardDoc, ForwardIndex, InvertedDoc, InvertedIndex, LegacyEntry,
};
use crate::types::Post;

use super::document::{legacy_haystack, Document};

/// Which artifact shape to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Legacy,
    V2,
    #[default]
    V3,
}

/// Global statistics shared by the v2 and v3 writers.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusStats {
    /// Document count, floored at 1.
    pub n: u32,
    pub avdl: f64,
    pub vocab: HashMap<String, u32>,
    pub df: Vec<u32>,
    /// Per document `(tokenId, freq)` in first-seen order.
    pub doc_terms: Vec<Vec<(u32, u32)>>,
}

impl CorpusStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut vocab: HashMap<String, u32> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();
        let mut doc_terms = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut terms = Vec::with_capacity(doc.tf.len());
            for (token, freq) in &doc.tf {
                let id = match vocab.get(token) {
                    Some(&id) => id,
                    None => {
                        let id = df.len() as u32;
                        vocab.insert(token.clone(), id);
                        df.push(0);
                        id
                    }
                };
                // tf has one entry per distinct token, so this counts documents.
                df[id as usize] += 1;
                terms.push((id, *freq));
            }
            doc_terms.push(terms);
        }

        let total: u64 = documents.iter().map(|d| u64::from(d.dl)).sum();
        let avdl = if documents.is_empty() {
            0.0
        } else {
            total as f64 / documents.len() as f64
        };

        CorpusStats {
            n: documents.len().max(1) as u32,
            avdl,
            vocab,
            df,
            doc_terms,
        }
    }
}

/// Inverted (v3) artifact: `postings[tokenId] = [docId, freq, ...]`.
pub fn build_inverted(documents: &[Document]) -> InvertedIndex {
    let stats = CorpusStats::from_documents(documents);
    let mut postings: Vec<Vec<u32>> = vec![Vec::new(); stats.df.len()];
    for (doc_id, terms) in stats.doc_terms.iter().enumerate() {
        for &(token_id, freq) in terms {
            let list = &mut postings[token_id as usize];
            list.push(doc_id as u32);
            list.push(freq);
        }
    }

    InvertedIndex {
        n: stats.n,
        avdl: stats.avdl,
        df: stats.df,
        vocab: stats.vocab,
        postings,
        docs: documents
            .iter()
            .map(|d| InvertedDoc {
                m: d.meta.clone(),
                dl: d.dl,
            })
            .collect(),
    }
}

/// Forward (v2) artifact: `docs[i].t = [tokenId, freq, ...]`.
pub fn build_forward(documents: &[Document]) -> ForwardIndex {
    let stats = CorpusStats::from_documents(documents);
    let docs = documents
        .iter()
        .zip(&stats.doc_terms)
        .map(|(d, terms)| ForwardDoc {
            m: d.meta.clone(),
            dl: d.dl,
            t: terms.iter().flat_map(|&(id, freq)| [id, freq]).collect(),
        })
        .collect();

    ForwardIndex {
        n: stats.n,
        avdl: stats.avdl,
        df: stats.df,
        vocab: stats.vocab,
        docs,
    }
}

/// Legacy artifact: metadata plus lowercase haystack, in input order.
pub fn build_legacy(posts: &[Post]) -> Vec<LegacyEntry> {
    posts
        .iter()
        .map(|post| LegacyEntry {
            meta: post.meta(),
            h: legacy_haystack(post),
        })
        .collect()
}

/// Build an artifact of the requested shape from already-validated posts.
pub fn build_artifact(posts: &[Post], documents: &[Document], format: OutputFormat) -> Artifact {
    match format {
        OutputFormat::Legacy => Artifact::Legacy(build_legacy(posts)),
        OutputFormat::V2 => Artifact::V2(build_forward(documents)),
        OutputFormat::V3 => Artifact::V3(build_inverted(documents)),
    }
}
