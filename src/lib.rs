// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25 search for a static blog.
//!
//! An offline builder turns the post corpus into a JSON artifact; a query
//! engine loads that artifact on demand, caches it, and ranks posts against a
//! free-text query.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌─────────────┐
//! │  types   │───▶│   build    │───▶│  artifact   │  search-index.json
//! │  (Post)  │    │ (tokenize, │    │ (Legacy/v2/ │
//! └──────────┘    │  df, avdl) │    │    v3)      │
//!                 └────────────┘    └──────┬──────┘
//!                                          │
//! ┌──────────┐    ┌────────────┐    ┌──────▼──────┐
//! │  server  │───▶│   engine   │───▶│   search    │
//! │  (axum)  │    │ (sources,  │    │ (scoring,   │
//! └──────────┘    │  TTL cache)│    │  ranking)   │
//!                 └────────────┘    └─────────────┘
//! ```
//!
//! | Module     | Responsibility                                          |
//! |------------|---------------------------------------------------------|
//! | `tokenize` | stop words, weighted field tokens, query tokens         |
//! | `artifact` | the three on-disk shapes and their invariants           |
//! | `build`    | posts to artifact, atomic write                         |
//! | `scoring`  | BM25 terms, tie-breaking, result cap                    |
//! | `search`   | one dispatch point over the artifact shapes             |
//! | `engine`   | ordered acquisition chain and single-slot cache         |
//! | `server`   | `GET /api/search?q=`                                    |
//!
//! # Usage
//!
//! ```
//! use folio::{build_from_posts, search, OutputFormat, Post};
//!
//! let posts = vec![Post {
//!     slug: "hello".to_string(),
//!     title: "Hello Rust".to_string(),
//!     date: "2024-01-01".to_string(),
//!     ..Post::default()
//! }];
//! let artifact = build_from_posts(&posts, OutputFormat::V3);
//! let results = search(&artifact, "rust");
//! assert_eq!(results[0].slug, "hello");
//! ```

pub mod artifact;
pub mod build;
pub mod config;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod search;
pub mod server;
pub mod testing;
pub mod tokenize;
pub mod types;

pub use artifact::{Artifact, ArtifactKind};
pub use build::{build_from_posts, run_build, BuildSummary, OutputFormat};
pub use config::{BuildConfig, InputSource, ServeConfig};
pub use engine::{ArtifactCache, ArtifactSource, QueryEngine};
pub use error::{AcquisitionError, ArtifactError, BuildError};
pub use scoring::ranking::{Hit, MAX_RESULTS};
pub use search::{search, search_hits, search_with_limit};
pub use tokenize::{query_tokens, tokenize};
pub use types::{DocMeta, Post, PostSummary, Width};
