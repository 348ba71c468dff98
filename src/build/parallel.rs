// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel tokenization.
//!
//! Tokenizing posts is the only part of a build that scales with content size,
//! and every post is independent. Rayon's indexed `par_iter().map().collect()`
//! keeps input order, so the vocabulary assigned afterwards is identical to a
//! sequential build.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::types::Post;

use super::document::Document;

/// Tokenize every post, preserving order.
#[cfg(feature = "parallel")]
pub fn tokenize_posts(posts: &[Post]) -> Vec<Document> {
    posts.par_iter().map(Document::from_post).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn tokenize_posts(posts: &[Post]) -> Vec<Document> {
    posts.iter().map(Document::from_post).collect()
}

/// Tokenize every post with progress reporting.
#[cfg(feature = "parallel")]
pub fn tokenize_posts_with_progress(posts: &[Post], progress: &ProgressBar) -> Vec<Document> {
    let counter = AtomicUsize::new(0);
    let total = posts.len();

    posts
        .par_iter()
        .map(|post| {
            let doc = Document::from_post(post);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 50 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            doc
        })
        .collect()
}

/// Non-parallel fallback (no-op progress).
#[cfg(not(feature = "parallel"))]
pub fn tokenize_posts_with_progress(posts: &[Post]) -> Vec<Document> {
    tokenize_posts(posts)
}
