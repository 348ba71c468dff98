// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the pipeline.
//!
//! A [`Post`] is what the content source hands the builder. The builder keeps a
//! trimmed projection of it, [`DocMeta`], inside the artifact so results can be
//! rendered without touching the content store. At query time every hit is
//! turned into a [`PostSummary`], the only shape the HTTP API ever returns.
//!
//! ```text
//! Post ──(build)──▶ DocMeta ──(search)──▶ PostSummary
//!  full content      no content            content = ""
//!                                          width defaulted
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Read a field that may be `null` as its default. Content exports write
/// absent values as `null`, which `#[serde(default)]` alone does not cover.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Layout width of a post card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    Small,
    #[default]
    Medium,
    Large,
}

/// A row from the content source.
///
/// Parsing is lenient: every field has a default and `null` reads as that
/// default, so a defective row can be reported by [`Post::validate`] instead
/// of failing the whole payload.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Post {
    pub path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// ISO-8601 timestamp. Compared lexically when breaking score ties.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    pub excerpt: Option<String>,
    /// Empty for album posts, which contribute metadata tokens only.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub width: Option<Width>,
}

/// Why a [`Post`] cannot be indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostDefect {
    MissingSlug,
    MissingDate,
}

impl std::fmt::Display for PostDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostDefect::MissingSlug => write!(f, "missing slug"),
            PostDefect::MissingDate => write!(f, "missing date"),
        }
    }
}

impl Post {
    /// Check the fields the index cannot do without.
    pub fn validate(&self) -> Result<(), PostDefect> {
        if self.slug.trim().is_empty() {
            return Err(PostDefect::MissingSlug);
        }
        if self.date.trim().is_empty() {
            return Err(PostDefect::MissingDate);
        }
        Ok(())
    }

    /// Project onto the metadata stored in the artifact.
    pub fn meta(&self) -> DocMeta {
        DocMeta {
            path: self.path.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
            timezone: self.timezone.clone(),
            excerpt: self.excerpt.clone(),
            author: self.author.clone(),
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags.clone())
            },
            thumbnail: self.thumbnail.clone(),
            width: self.width,
        }
    }
}

/// Post metadata stored per document in the artifact (`docs[i].m`).
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct DocMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
}

/// One entry of the `GET /api/search` response.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PostSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Always blank. Search never ships post bodies.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub width: Width,
}

impl From<&DocMeta> for PostSummary {
    fn from(meta: &DocMeta) -> Self {
        PostSummary {
            path: meta.path.clone(),
            slug: meta.slug.clone(),
            title: meta.title.clone(),
            date: meta.date.clone(),
            timezone: meta.timezone.clone(),
            excerpt: meta.excerpt.clone(),
            content: String::new(),
            tags: meta.tags.clone(),
            author: meta.author.clone(),
            thumbnail: meta.thumbnail.clone(),
            width: meta.width.unwrap_or_default(),
        }
    }
}
