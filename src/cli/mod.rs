// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Four subcommands: `index` builds the artifact from posts, `inspect`
//! validates and summarizes an artifact, `search` runs the scorer offline, and
//! `serve` starts the HTTP query API. Serve options fall back to `FOLIO_*`
//! environment variables so the same binary runs unchanged under a platform
//! that configures through env.

pub mod display;
pub mod inspect;
pub mod results;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use folio::config::{ARTIFACT_URL_PATH, DEFAULT_BIND, DEFAULT_INDEX_PATH};
use folio::{BuildConfig, InputSource, OutputFormat, ServeConfig};

#[derive(Parser)]
#[command(name = "folio", about = "BM25 search index builder and query server", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search artifact from a JSON array of posts
    Index {
        /// Posts file, or `-` to read stdin
        #[arg(short, long)]
        input: String,

        /// Where to write the artifact
        #[arg(short, long, default_value = DEFAULT_INDEX_PATH)]
        output: PathBuf,

        /// Artifact shape to emit
        #[arg(long, value_enum, default_value_t = OutputFormat::V3)]
        format: OutputFormat,

        /// Skip posts missing a slug or date instead of failing the build
        #[arg(long)]
        allow_invalid: bool,
    },

    /// Validate an artifact and print its statistics
    Inspect {
        /// Path to the artifact
        file: PathBuf,
    },

    /// Search an artifact and display ranked results
    Search {
        /// Path to the artifact
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return (capped at 50)
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Serve `GET /api/search?q=` over HTTP
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "FOLIO_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Root of the platform's static asset store
    #[arg(long, env = "FOLIO_ASSET_DIR")]
    pub asset_dir: Option<PathBuf>,

    /// Local artifact path
    #[arg(long, env = "FOLIO_INDEX_PATH", default_value = DEFAULT_INDEX_PATH)]
    pub index_path: PathBuf,

    /// Site origin for the HTTP fallback, e.g. https://example.com
    #[arg(long, env = "FOLIO_ORIGIN")]
    pub origin: Option<String>,

    /// Seconds a loaded artifact is reused
    #[arg(long, env = "FOLIO_CACHE_TTL", default_value = "300")]
    pub ttl_secs: u64,

    /// Upper bound on the HTTP fallback fetch
    #[arg(long, default_value = "10")]
    pub http_timeout_secs: u64,
}

impl ServeArgs {
    pub fn into_config(self) -> ServeConfig {
        ServeConfig {
            bind: self.bind,
            asset_dir: self.asset_dir,
            index_path: Some(self.index_path),
            origin: self.origin.filter(|o| !o.trim().is_empty()),
            artifact_url_path: ARTIFACT_URL_PATH.to_string(),
            cache_ttl: Duration::from_secs(self.ttl_secs),
            http_timeout: Duration::from_secs(self.http_timeout_secs),
        }
    }
}

pub fn build_config(input: &str, output: PathBuf, format: OutputFormat, allow_invalid: bool) -> BuildConfig {
    let mut config = BuildConfig::new(InputSource::from(input), output);
    config.format = format;
    config.allow_invalid = allow_invalid;
    config
}
