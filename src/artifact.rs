// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The serialized search index and its three historical shapes.
//!
//! ```text
//! Legacy  [ { ...DocMeta, h } ]                      substring haystacks, no ranking
//! v2      { v: 2, N, avdl, df, vocab, docs: [{m, dl, t}] }          forward index
//! v3      { v: 3, N, avdl, df, vocab, postings, docs: [{m, dl}] }  inverted index
//! ```
//!
//! Pairs arrays are flat: `t = [tokenId, freq, tokenId, freq, ...]` and
//! `postings[tokenId] = [docId, freq, docId, freq, ...]`.
//!
//! JSON has no tag we can hand to serde directly (legacy is a bare array and
//! the version is an integer), so [`Artifact::from_slice`] peeks at the shape
//! first and then decodes the matching variant. After that the rest of the
//! crate only ever matches on [`Artifact`].
//!
//! # Invariants
//!
//! - `N >= 1`
//! - `df.len() == vocab.len()` and vocab ids are dense in `[0, vocab.len())`
//! - every token id referenced by `postings`/`t` is a valid vocab id
//! - `df[id]` is the number of distinct documents containing `id`
//!
//! [`Artifact::validate`] checks all of these. The engine does not call it on
//! the request path; `folio inspect` and the tests do.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::ArtifactError;
use crate::types::DocMeta;

/// Discriminant of [`Artifact`], for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Legacy,
    V2,
    V3,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Legacy => write!(f, "legacy"),
            ArtifactKind::V2 => write!(f, "v2"),
            ArtifactKind::V3 => write!(f, "v3"),
        }
    }
}

/// Legacy entry: metadata plus a precomputed lowercase haystack.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LegacyEntry {
    #[serde(flatten)]
    pub meta: DocMeta,
    pub h: String,
}

/// v2 document: metadata, length, and its forward `[tokenId, freq]` pairs.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ForwardDoc {
    pub m: DocMeta,
    pub dl: u32,
    pub t: Vec<u32>,
}

/// v2 artifact body.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ForwardIndex {
    #[serde(rename = "N")]
    pub n: u32,
    pub avdl: f64,
    pub df: Vec<u32>,
    #[serde(serialize_with = "serialize_vocab")]
    pub vocab: HashMap<String, u32>,
    pub docs: Vec<ForwardDoc>,
}

/// v3 document: metadata and length. Term data lives in `postings`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct InvertedDoc {
    pub m: DocMeta,
    pub dl: u32,
}

/// v3 artifact body.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct InvertedIndex {
    #[serde(rename = "N")]
    pub n: u32,
    pub avdl: f64,
    pub df: Vec<u32>,
    #[serde(serialize_with = "serialize_vocab")]
    pub vocab: HashMap<String, u32>,
    pub postings: Vec<Vec<u32>>,
    pub docs: Vec<InvertedDoc>,
}

/// A loaded search index in any supported shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Artifact {
    Legacy(Vec<LegacyEntry>),
    V2(ForwardIndex),
    V3(InvertedIndex),
}

/// Write vocab in id order so identical builds produce identical bytes.
fn serialize_vocab<S: Serializer>(
    vocab: &HashMap<String, u32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    let mut entries: Vec<(&String, &u32)> = vocab.iter().collect();
    entries.sort_by_key(|(_, id)| **id);
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (token, id) in entries {
        map.serialize_entry(token, id)?;
    }
    map.end()
}

#[derive(Serialize)]
struct Versioned<'a, T> {
    v: u32,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for Artifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Artifact::Legacy(entries) => entries.serialize(serializer),
            Artifact::V2(index) => Versioned { v: 2, body: index }.serialize(serializer),
            Artifact::V3(index) => Versioned { v: 3, body: index }.serialize(serializer),
        }
    }
}

/// `v` as an integer. JavaScript producers may write `3.0` for `3`.
fn version_number(v: &Value) -> Option<u64> {
    if let Some(n) = v.as_u64() {
        return Some(n);
    }
    let f = v.as_f64()?;
    (f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64).then_some(f as u64)
}

impl Artifact {
    /// The empty corpus. Used when every acquisition stage fails.
    pub fn empty() -> Self {
        Artifact::Legacy(Vec::new())
    }

    /// Decode an artifact, picking the variant from its shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ArtifactError> {
        if value.is_array() {
            return Ok(Artifact::Legacy(serde_json::from_value(value)?));
        }
        let version = value
            .get("v")
            .and_then(version_number)
            .ok_or(ArtifactError::MissingVersion)?;
        match version {
            2 => Ok(Artifact::V2(serde_json::from_value(value)?)),
            3 => Ok(Artifact::V3(serde_json::from_value(value)?)),
            other => Err(ArtifactError::UnsupportedVersion(other)),
        }
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Legacy(_) => ArtifactKind::Legacy,
            Artifact::V2(_) => ArtifactKind::V2,
            Artifact::V3(_) => ArtifactKind::V3,
        }
    }

    pub fn doc_count(&self) -> usize {
        match self {
            Artifact::Legacy(entries) => entries.len(),
            Artifact::V2(index) => index.docs.len(),
            Artifact::V3(index) => index.docs.len(),
        }
    }

    /// Vocabulary size (0 for legacy).
    pub fn vocab_len(&self) -> usize {
        match self {
            Artifact::Legacy(_) => 0,
            Artifact::V2(index) => index.vocab.len(),
            Artifact::V3(index) => index.vocab.len(),
        }
    }

    /// Check the structural invariants listed in the module docs.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            Artifact::Legacy(_) => Ok(()),
            Artifact::V2(index) => {
                check_header(index.n, &index.df, &index.vocab)?;
                let mut seen = vec![0u32; index.df.len()];
                for (doc_id, doc) in index.docs.iter().enumerate() {
                    let pairs = check_pairs(&doc.t, "t", doc_id)?;
                    let mut in_doc = vec![false; index.df.len()];
                    for (token_id, _) in pairs {
                        let slot = in_doc.get_mut(token_id as usize).ok_or_else(|| {
                            inconsistent(format!(
                                "docs[{}].t references token {} outside vocab",
                                doc_id, token_id
                            ))
                        })?;
                        if !*slot {
                            *slot = true;
                            seen[token_id as usize] += 1;
                        }
                    }
                }
                check_df(&index.df, &seen)
            }
            Artifact::V3(index) => {
                check_header(index.n, &index.df, &index.vocab)?;
                if index.postings.len() > index.df.len() {
                    return Err(inconsistent(format!(
                        "{} posting lists for {} vocab entries",
                        index.postings.len(),
                        index.df.len()
                    )));
                }
                let mut seen = vec![0u32; index.df.len()];
                for (token_id, list) in index.postings.iter().enumerate() {
                    let mut docs_for_token: Vec<u32> = Vec::new();
                    for (doc_id, _) in check_pairs(list, "postings", token_id)? {
                        if doc_id as usize >= index.docs.len() {
                            return Err(inconsistent(format!(
                                "postings[{}] references doc {} of {}",
                                token_id,
                                doc_id,
                                index.docs.len()
                            )));
                        }
                        docs_for_token.push(doc_id);
                    }
                    docs_for_token.sort_unstable();
                    docs_for_token.dedup();
                    seen[token_id] = docs_for_token.len() as u32;
                }
                check_df(&index.df, &seen)
            }
        }
    }
}

fn inconsistent(message: String) -> ArtifactError {
    ArtifactError::Inconsistent(message)
}

fn check_header(n: u32, df: &[u32], vocab: &HashMap<String, u32>) -> Result<(), ArtifactError> {
    if n == 0 {
        return Err(inconsistent("N must be at least 1".to_string()));
    }
    if df.len() != vocab.len() {
        return Err(inconsistent(format!(
            "df has {} entries but vocab has {}",
            df.len(),
            vocab.len()
        )));
    }
    let mut taken = vec![false; vocab.len()];
    for (token, &id) in vocab {
        match taken.get_mut(id as usize) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => return Err(inconsistent(format!("vocab id {} assigned twice", id))),
            None => {
                return Err(inconsistent(format!(
                    "vocab id {} for {:?} is not dense",
                    id, token
                )))
            }
        }
    }
    Ok(())
}

fn check_pairs<'a>(
    pairs: &'a [u32],
    field: &str,
    owner: usize,
) -> Result<impl Iterator<Item = (u32, u32)> + 'a, ArtifactError> {
    if pairs.len() % 2 != 0 {
        return Err(inconsistent(format!(
            "{}[{}] has odd length {}",
            field,
            owner,
            pairs.len()
        )));
    }
    Ok(pairs.chunks_exact(2).map(|pair| (pair[0], pair[1])))
}

fn check_df(df: &[u32], seen: &[u32]) -> Result<(), ArtifactError> {
    for (token_id, (&stored, &counted)) in df.iter().zip(seen).enumerate() {
        if stored != counted {
            return Err(inconsistent(format!(
                "df[{}] = {} but {} documents contain the token",
                token_id, stored, counted
            )));
        }
    }
    Ok(())
}
