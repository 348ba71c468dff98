// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so the tests and benches agree on data.

#![doc(hidden)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::artifact::Artifact;
use crate::engine::ArtifactSource;
use crate::error::AcquisitionError;
use crate::types::{Post, Width};

/// Create a post with the fields search cares about.
pub fn make_post(slug: &str, title: &str, date: &str, content: &str) -> Post {
    Post {
        path: Some(format!("/posts/{}", slug)),
        slug: slug.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        timezone: "UTC".to_string(),
        excerpt: None,
        content: content.to_string(),
        author: "Test Author".to_string(),
        tags: vec![],
        thumbnail: None,
        width: None,
    }
}

/// A small blog: two articles and a photo album with no body.
pub fn sample_posts() -> Vec<Post> {
    let mut rust = make_post(
        "learning-rust",
        "Learning Rust",
        "2024-03-01T09:00:00.000Z",
        "Ownership and borrowing take a while to click. Lifetimes too.",
    );
    rust.tags = vec!["programming".to_string(), "rust".to_string()];
    rust.excerpt = Some("Notes from my first month with the borrow checker.".to_string());

    let mut bread = make_post(
        "sourdough",
        "Sourdough Diary",
        "2023-11-20T18:30:00.000Z",
        "Starter, flour, water, salt. Patience is the secret ingredient.",
    );
    bread.tags = vec!["cooking".to_string()];

    let mut album = make_post("iceland", "Iceland", "2023-07-15T12:00:00.000Z", "");
    album.path = Some("/albums/iceland".to_string());
    album.tags = vec!["travel".to_string(), "photography".to_string()];
    album.thumbnail = Some("/img/iceland/cover.jpg".to_string());
    album.width = Some(Width::Large);

    vec![rust, bread, album]
}

/// Generate `count` posts that all mention `term` in the title.
pub fn posts_mentioning(term: &str, count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| {
            make_post(
                &format!("post-{}", i),
                &format!("{} {}", term, i),
                &format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                &"filler text ".repeat(i % 7),
            )
        })
        .collect()
}

/// Shared call counter handed out alongside a test source.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Always succeeds with the same artifact and counts fetches.
pub struct CountingSource {
    artifact: Artifact,
    calls: CallCounter,
}

impl CountingSource {
    pub fn new(artifact: Artifact) -> (Self, CallCounter) {
        let calls = CallCounter::default();
        (
            CountingSource {
                artifact,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl ArtifactSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch(&self) -> Result<Artifact, AcquisitionError> {
        self.calls.bump();
        Ok(self.artifact.clone())
    }
}

/// Always fails and counts attempts.
pub struct FailingSource {
    name: String,
    calls: CallCounter,
}

impl FailingSource {
    pub fn new(name: &str) -> (Self, CallCounter) {
        let calls = CallCounter::default();
        (
            FailingSource {
                name: name.to_string(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl ArtifactSource for FailingSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Artifact, AcquisitionError> {
        self.calls.bump();
        Err(AcquisitionError::NotFound {
            path: self.name.clone(),
        })
    }
}
