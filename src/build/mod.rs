// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The offline index builder.
//!
//! ```text
//! posts.json ──▶ screen ──▶ tokenize (rayon) ──▶ corpus stats ──▶ artifact
//!                  │                                                  │
//!            rejects: fail                              temp file + rename
//!            (or skip with --allow-invalid)             over the old index
//! ```
//!
//! A build either replaces the artifact completely or leaves the previous one
//! untouched. A stale full index is better than a fresh partial one.

pub mod document;
pub mod index;
pub mod input;
pub mod parallel;

use std::io::Write;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::artifact::{Artifact, ArtifactKind};
use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::types::Post;

pub use document::{legacy_haystack, Document};
pub use index::{build_artifact, build_forward, build_inverted, build_legacy, CorpusStats, OutputFormat};
pub use input::{parse_posts, read_posts, screen_posts, RejectedPost};
pub use parallel::tokenize_posts;

/// What a finished build produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub kind: ArtifactKind,
    pub doc_count: usize,
    pub vocab_size: usize,
    pub rejected: Vec<RejectedPost>,
    pub bytes: usize,
    pub crc32: u32,
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Build an artifact in memory from already-screened posts.
pub fn build_from_posts(posts: &[Post], format: OutputFormat) -> Artifact {
    let documents = match format {
        OutputFormat::Legacy => Vec::new(),
        OutputFormat::V2 | OutputFormat::V3 => tokenize_posts(posts),
    };
    build_artifact(posts, &documents, format)
}

/// Run a full build: read, screen, index, and atomically write.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary, BuildError> {
    let posts = read_posts(&config.input)?;
    let (posts, rejected) = screen_posts(posts);

    if !rejected.is_empty() && !config.allow_invalid {
        return Err(BuildError::InvalidPosts {
            count: rejected.len(),
        });
    }
    if posts.is_empty() {
        warn!("no posts to index; writing an empty artifact");
    }

    let documents = match config.format {
        OutputFormat::Legacy => Vec::new(),
        OutputFormat::V2 | OutputFormat::V3 => tokenize_with_progress(&posts),
    };
    let artifact = build_artifact(&posts, &documents, config.format);
    let bytes = artifact.to_vec()?;
    write_atomic(&config.output, &bytes)?;

    let summary = BuildSummary {
        kind: artifact.kind(),
        doc_count: artifact.doc_count(),
        vocab_size: artifact.vocab_len(),
        rejected,
        bytes: bytes.len(),
        crc32: crc32fast::hash(&bytes),
    };
    info!(
        kind = %summary.kind,
        docs = summary.doc_count,
        vocab = summary.vocab_size,
        bytes = summary.bytes,
        crc32 = %format!("{:08x}", summary.crc32),
        path = %config.output.display(),
        "search index written"
    );
    Ok(summary)
}

#[cfg(feature = "parallel")]
fn tokenize_with_progress(posts: &[Post]) -> Vec<Document> {
    let progress = ProgressBar::new(posts.len() as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("Tokenizing");
    progress.set_message("posts...");
    let documents = parallel::tokenize_posts_with_progress(posts, &progress);
    progress.finish_with_message(format!("tokenized {} posts", documents.len()));
    documents
}

#[cfg(not(feature = "parallel"))]
fn tokenize_with_progress(posts: &[Post]) -> Vec<Document> {
    parallel::tokenize_posts_with_progress(posts)
}

/// Write `bytes` to `path` through a temp file in the same directory.
///
/// The rename is atomic on the same filesystem, so readers see either the old
/// artifact or the new one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), BuildError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source: std::io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(write_err)?;
    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(bytes).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
