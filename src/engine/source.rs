// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Named ways of getting hold of the artifact.
//!
//! The engine tries sources in order and takes the first artifact it can
//! decode. Each source reports why it failed instead of swallowing the reason,
//! so a persistently empty index can be traced to the stage that broke.
//!
//! | Source            | Where it reads                                        |
//! |-------------------|-------------------------------------------------------|
//! | [`AssetDirSource`]| the hosting platform's static asset store             |
//! | [`FileSource`]    | a local path, for development                         |
//! | [`HttpSource`]    | `{origin}{path}` over HTTP, with edge cache directives |

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;

use crate::artifact::Artifact;
use crate::error::AcquisitionError;

/// Asks the edge to keep the artifact for an hour.
pub const ARTIFACT_FETCH_CACHE_CONTROL: &str = "public, max-age=3600";

#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Artifact, AcquisitionError>;
}

async fn read_artifact_file(path: &std::path::Path) -> Result<Artifact, AcquisitionError> {
    let display = path.display().to_string();
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AcquisitionError::NotFound { path: display.clone() }
        } else {
            AcquisitionError::Io {
                path: display.clone(),
                source,
            }
        }
    })?;
    Ok(Artifact::from_slice(&bytes)?)
}

/// Static asset store exposed by the hosting platform, addressed by URL path.
///
/// The store is a directory (the site's deployed output); the URL path is
/// resolved underneath it.
#[derive(Debug, Clone)]
pub struct AssetDirSource {
    root: PathBuf,
    url_path: String,
}

impl AssetDirSource {
    pub fn new(root: impl Into<PathBuf>, url_path: impl Into<String>) -> Self {
        AssetDirSource {
            root: root.into(),
            url_path: url_path.into(),
        }
    }

    /// Resolve the URL path inside the store. `..` segments are not followed.
    pub fn resolve(&self) -> PathBuf {
        let mut path = self.root.clone();
        for segment in self.url_path.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                continue;
            }
            path.push(segment);
        }
        path
    }
}

#[async_trait]
impl ArtifactSource for AssetDirSource {
    fn name(&self) -> &str {
        "assets"
    }

    async fn fetch(&self) -> Result<Artifact, AcquisitionError> {
        read_artifact_file(&self.resolve()).await
    }
}

/// Artifact read straight from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[async_trait]
impl ArtifactSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Artifact, AcquisitionError> {
        read_artifact_file(&self.path).await
    }
}

/// Same-origin HTTP fetch of the published artifact.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(origin: &str, url_path: &str, timeout: Duration) -> Result<Self, AcquisitionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpSource {
            client,
            url: join_url(origin, url_path),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn join_url(origin: &str, url_path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        url_path.trim_start_matches('/')
    )
}

#[async_trait]
impl ArtifactSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<Artifact, AcquisitionError> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, ARTIFACT_FETCH_CACHE_CONTROL)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AcquisitionError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(Artifact::from_slice(&bytes)?)
    }
}
