// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for building, parsing, and acquiring artifacts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an index build. Any of these means no artifact is written.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid post payload in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{count} post(s) rejected; refusing to write a partial index")]
    InvalidPosts { count: usize },

    #[error("failed to serialize artifact: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from decoding or validating an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("invalid artifact JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("artifact object has no numeric `v` field")]
    MissingVersion,

    #[error("unsupported artifact version {0}")]
    UnsupportedVersion(u64),

    #[error("inconsistent artifact: {0}")]
    Inconsistent(String),
}

/// Why one acquisition stage could not produce an artifact.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("{path} not found")]
    NotFound { path: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
