// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `folio inspect`: decode, validate, and summarize an artifact.

use std::path::Path;

use anyhow::Context;
use folio::artifact::{Artifact, ArtifactKind};

use super::display::*;

const TOP_TERMS: usize = 10;

pub struct Report {
    pub kind: ArtifactKind,
    pub bytes: usize,
    pub crc32: u32,
    pub doc_count: usize,
    /// `N` and `avdl` as stored. Legacy artifacts have neither.
    pub stats: Option<(u32, f64)>,
    pub vocab_len: usize,
    /// Total `(doc, tf)` pairs, counted from postings (v3) or forward lists (v2).
    pub pairs: usize,
    /// Most common terms by document frequency, ties broken alphabetically.
    pub top_terms: Vec<(String, u32)>,
    pub problem: Option<String>,
}

impl Report {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, folio::ArtifactError> {
        let artifact = Artifact::from_slice(bytes)?;
        let (stats, pairs, top_terms) = match &artifact {
            Artifact::Legacy(_) => (None, 0, Vec::new()),
            Artifact::V2(index) => (
                Some((index.n, index.avdl)),
                index.docs.iter().map(|d| d.t.len() / 2).sum(),
                top_terms(&index.vocab, &index.df),
            ),
            Artifact::V3(index) => (
                Some((index.n, index.avdl)),
                index.postings.iter().map(|p| p.len() / 2).sum(),
                top_terms(&index.vocab, &index.df),
            ),
        };
        Ok(Report {
            kind: artifact.kind(),
            bytes: bytes.len(),
            crc32: crc32fast::hash(bytes),
            doc_count: artifact.doc_count(),
            stats,
            vocab_len: artifact.vocab_len(),
            pairs,
            top_terms,
            problem: artifact.validate().err().map(|e| e.to_string()),
        })
    }
}

fn top_terms(vocab: &std::collections::HashMap<String, u32>, df: &[u32]) -> Vec<(String, u32)> {
    let mut terms: Vec<(String, u32)> = vocab
        .iter()
        .filter_map(|(token, &id)| df.get(id as usize).map(|&d| (token.clone(), d)))
        .collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(TOP_TERMS);
    terms
}

/// Print the report. Returns whether the artifact passed validation.
pub fn run(path: &Path) -> anyhow::Result<bool> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let report =
        Report::from_bytes(&bytes).with_context(|| format!("decoding {}", path.display()))?;

    section_top("ARTIFACT");
    field("file", &truncate(&path.display().to_string(), 60));
    field("format", &kind_badge(report.kind));
    field(
        "size",
        &format!("{} ({} bytes)", format_size(report.bytes), report.bytes),
    );
    field("crc32", &format!("{:08x}", report.crc32));
    field("status", &status_badge(report.problem.is_none()));
    if let Some(problem) = &report.problem {
        field("problem", &themed(RED, &[], &truncate(problem, 60)));
    }

    section_mid("CORPUS");
    field("documents", &report.doc_count.to_string());
    match report.stats {
        Some((n, avdl)) => {
            field("N", &n.to_string());
            field("avdl", &format!("{:.2}", avdl));
            field("vocabulary", &report.vocab_len.to_string());
            field("pairs", &report.pairs.to_string());
        }
        None => field("scoring", &dim("substring match only")),
    }

    if !report.top_terms.is_empty() {
        section_mid("TOP TERMS BY DF");
        for (token, df) in &report.top_terms {
            row(&format!("  {:<24}{:>6}", truncate(token, 24), df));
        }
    }
    section_bot();

    Ok(report.problem.is_none())
}
