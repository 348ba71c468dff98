// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resolved configuration for the build and serve commands.
//!
//! The CLI (clap, with env fallbacks) fills these in; tests build them
//! directly. Defaults match the site layout: the builder writes
//! `public/search-index.json` and the site serves it at `/search-index.json`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::build::OutputFormat;

/// Where the builder writes, and where local development reads.
pub const DEFAULT_INDEX_PATH: &str = "public/search-index.json";

/// URL path of the artifact on the site and in the asset store.
pub const ARTIFACT_URL_PATH: &str = "/search-index.json";

/// How long a loaded artifact is reused.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Upper bound on the same-origin fetch.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Where the builder reads posts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<&str> for InputSource {
    fn from(value: &str) -> Self {
        if value == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(value))
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub input: InputSource,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Skip rejected posts instead of failing the run.
    pub allow_invalid: bool,
}

impl BuildConfig {
    pub fn new(input: InputSource, output: impl Into<PathBuf>) -> Self {
        BuildConfig {
            input,
            output: output.into(),
            format: OutputFormat::default(),
            allow_invalid: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind: SocketAddr,
    /// Root of the platform's static asset store, if running under one.
    pub asset_dir: Option<PathBuf>,
    /// Local artifact path for development.
    pub index_path: Option<PathBuf>,
    /// Site origin for the same-origin HTTP fallback, e.g. `https://example.com`.
    pub origin: Option<String>,
    pub artifact_url_path: String,
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 8787)),
            asset_dir: None,
            index_path: Some(PathBuf::from(DEFAULT_INDEX_PATH)),
            origin: None,
            artifact_url_path: ARTIFACT_URL_PATH.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}
