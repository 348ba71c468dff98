// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query-time engine: acquire, cache, search.
//!
//! Per request the engine is in one of two states:
//!
//! ```text
//!            ┌────────────── cache fresh ──────────────┐
//! request ──▶│                                         ├──▶ score ──▶ ≤ 50 summaries
//!            └─ cache stale/empty ─▶ sources in order ─┘
//!                                    first success wins
//!                                    all fail → empty corpus
//! ```
//!
//! Acquisition failure is never surfaced to the caller. Every failed stage is
//! logged with its reason, and if nothing works the engine serves the empty
//! corpus until the TTL runs out and it tries again.

pub mod cache;
pub mod source;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::artifact::Artifact;
use crate::config::ServeConfig;
use crate::error::AcquisitionError;
use crate::search;
use crate::types::PostSummary;

pub use cache::ArtifactCache;
pub use source::{ArtifactSource, AssetDirSource, FileSource, HttpSource};

pub struct QueryEngine {
    sources: Vec<Box<dyn ArtifactSource>>,
    cache: ArtifactCache,
}

impl QueryEngine {
    pub fn new(sources: Vec<Box<dyn ArtifactSource>>, ttl: Duration) -> Self {
        QueryEngine {
            sources,
            cache: ArtifactCache::new(ttl),
        }
    }

    /// Assemble the acquisition chain from whatever the config provides:
    /// asset store, then local file, then same-origin HTTP.
    pub fn from_config(config: &ServeConfig) -> Result<Self, AcquisitionError> {
        let mut sources: Vec<Box<dyn ArtifactSource>> = Vec::new();
        if let Some(root) = &config.asset_dir {
            sources.push(Box::new(AssetDirSource::new(
                root,
                config.artifact_url_path.as_str(),
            )));
        }
        if let Some(path) = &config.index_path {
            sources.push(Box::new(FileSource::new(path)));
        }
        if let Some(origin) = &config.origin {
            sources.push(Box::new(HttpSource::new(
                origin,
                &config.artifact_url_path,
                config.http_timeout,
            )?));
        }
        if sources.is_empty() {
            warn!("no artifact sources configured; every search will be empty");
        }
        Ok(Self::new(sources, config.cache_ttl))
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    /// The current artifact, reacquiring it if the cache is stale.
    pub async fn artifact(&self) -> Arc<Artifact> {
        if let Some(artifact) = self.cache.get_fresh() {
            debug!("artifact cache hit");
            return artifact;
        }
        let artifact = Arc::new(self.acquire().await);
        self.cache.store(Arc::clone(&artifact));
        artifact
    }

    /// Run the acquisition chain once, bypassing the cache.
    pub async fn acquire(&self) -> Artifact {
        for source in &self.sources {
            match source.fetch().await {
                Ok(artifact) => {
                    info!(
                        source = source.name(),
                        kind = %artifact.kind(),
                        docs = artifact.doc_count(),
                        "search artifact loaded"
                    );
                    return artifact;
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "artifact source failed");
                }
            }
        }
        error!(
            sources = self.sources.len(),
            "no artifact source succeeded; serving empty corpus"
        );
        Artifact::empty()
    }

    /// Answer a query. Blank queries return immediately without loading anything.
    pub async fn search(&self, query: &str) -> Vec<PostSummary> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let artifact = self.artifact().await;
        search::search(&artifact, query)
    }
}
