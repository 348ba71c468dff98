// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading and screening the content source export.
//!
//! The content source hands over one JSON array of post rows. Rows are parsed
//! leniently and then screened with [`Post::validate`]; whether a rejected row
//! aborts the build is decided by the caller.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::InputSource;
use crate::error::BuildError;
use crate::types::{Post, PostDefect};

/// A row that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedPost {
    /// Position in the input array.
    pub position: usize,
    pub slug: String,
    pub defect: PostDefect,
}

/// Read the post array from a file or stdin.
pub fn read_posts(source: &InputSource) -> Result<Vec<Post>, BuildError> {
    match source {
        InputSource::File(path) => {
            let raw = std::fs::read(path).map_err(|source| BuildError::Read {
                path: path.clone(),
                source,
            })?;
            parse_posts(&raw, path)
        }
        InputSource::Stdin => {
            let mut raw = Vec::new();
            std::io::stdin()
                .read_to_end(&mut raw)
                .map_err(|source| BuildError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            parse_posts(&raw, Path::new("<stdin>"))
        }
    }
}

/// Parse a JSON array of posts. `origin` only labels errors.
pub fn parse_posts(raw: &[u8], origin: &Path) -> Result<Vec<Post>, BuildError> {
    serde_json::from_slice(raw).map_err(|source| BuildError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Split posts into indexable rows and rejects, logging each reject.
pub fn screen_posts(posts: Vec<Post>) -> (Vec<Post>, Vec<RejectedPost>) {
    let mut accepted = Vec::with_capacity(posts.len());
    let mut rejected = Vec::new();

    for (position, post) in posts.into_iter().enumerate() {
        match post.validate() {
            Ok(()) => accepted.push(post),
            Err(defect) => {
                warn!(position, slug = %post.slug, %defect, "rejecting post");
                rejected.push(RejectedPost {
                    position,
                    slug: post.slug,
                    defect,
                });
            }
        }
    }

    (accepted, rejected)
}
