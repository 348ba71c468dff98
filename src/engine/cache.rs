// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The single-slot artifact cache.
//!
//! One slot, one timestamp. A read returns the cached artifact while it is
//! younger than the TTL; after that the caller is expected to reacquire and
//! [`ArtifactCache::store`] the result. There is no refresh task.
//!
//! The lock guards only the swap of an `Arc`. It is never held while an
//! artifact is being fetched, so two requests that both find the slot stale
//! will both fetch, and whichever stores last wins. Each stored value is a
//! complete artifact, so readers never see a mix.
//!
//! Timestamps use `tokio::time::Instant` so tests can pause and advance time.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::artifact::Artifact;

#[derive(Debug, Clone)]
struct CacheEntry {
    artifact: Arc<Artifact>,
    loaded_at: Instant,
}

#[derive(Debug)]
pub struct ArtifactCache {
    ttl: Duration,
    slot: RwLock<Option<CacheEntry>>,
}

impl ArtifactCache {
    pub fn new(ttl: Duration) -> Self {
        ArtifactCache {
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached artifact, if one is present and younger than the TTL.
    pub fn get_fresh(&self) -> Option<Arc<Artifact>> {
        let slot = self.slot.read();
        slot.as_ref()
            .filter(|entry| entry.loaded_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.artifact))
    }

    /// Replace the slot, stamping it with the current time.
    pub fn store(&self, artifact: Arc<Artifact>) {
        *self.slot.write() = Some(CacheEntry {
            artifact,
            loaded_at: Instant::now(),
        });
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }
}
