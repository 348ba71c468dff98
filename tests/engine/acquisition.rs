//! The acquisition chain against real files and a local HTTP origin.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::net::TcpListener;

use crate::common::sample_posts;
use folio::engine::{AssetDirSource, FileSource, HttpSource};
use folio::{
    build_from_posts, AcquisitionError, ArtifactKind, ArtifactSource, OutputFormat, QueryEngine,
    ServeConfig,
};

fn artifact_bytes(format: OutputFormat) -> Vec<u8> {
    build_from_posts(&sample_posts(), format).to_vec().unwrap()
}

/// Cache-control headers the origin has received, in order.
type SeenHeaders = Arc<Mutex<Vec<String>>>;

/// Serve `body` at `/search-index.json` and record each request's
/// cache-control header.
async fn spawn_origin(body: Vec<u8>) -> (String, SeenHeaders) {
    let seen: SeenHeaders = Arc::default();
    let recorder = Arc::clone(&seen);
    let app = Router::new().route(
        "/search-index.json",
        get(move |headers: HeaderMap| {
            let body = body.clone();
            let recorder = Arc::clone(&recorder);
            async move {
                let value = headers
                    .get(CACHE_CONTROL)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                recorder.lock().push(value);
                body
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), seen)
}

#[tokio::test]
async fn test_asset_dir_takes_priority_over_file() {
    let assets = TempDir::new().unwrap();
    std::fs::write(
        assets.path().join("search-index.json"),
        artifact_bytes(OutputFormat::V3),
    )
    .unwrap();
    let local = TempDir::new().unwrap();
    let local_path = local.path().join("search-index.json");
    std::fs::write(&local_path, artifact_bytes(OutputFormat::Legacy)).unwrap();

    let engine = QueryEngine::new(
        vec![
            Box::new(AssetDirSource::new(assets.path(), "/search-index.json")),
            Box::new(FileSource::new(&local_path)),
        ],
        Duration::from_secs(300),
    );
    assert_eq!(engine.artifact().await.kind(), ArtifactKind::V3);
}

#[tokio::test]
async fn test_falls_through_to_local_file() {
    let empty_assets = TempDir::new().unwrap();
    let local = TempDir::new().unwrap();
    let local_path = local.path().join("search-index.json");
    std::fs::write(&local_path, artifact_bytes(OutputFormat::V2)).unwrap();

    let config = ServeConfig {
        asset_dir: Some(empty_assets.path().to_path_buf()),
        index_path: Some(local_path),
        ..ServeConfig::default()
    };
    let engine = QueryEngine::from_config(&config).unwrap();

    assert_eq!(engine.artifact().await.kind(), ArtifactKind::V2);
    assert_eq!(engine.search("sourdough").await[0].slug, "sourdough");
}

#[tokio::test]
async fn test_corrupt_file_falls_through_to_http() {
    let (origin, _) = spawn_origin(artifact_bytes(OutputFormat::V3)).await;
    let local = TempDir::new().unwrap();
    let local_path = local.path().join("search-index.json");
    std::fs::write(&local_path, b"{\"v\": 9}").unwrap();

    let config = ServeConfig {
        index_path: Some(local_path),
        origin: Some(origin),
        ..ServeConfig::default()
    };
    let engine = QueryEngine::from_config(&config).unwrap();
    assert_eq!(engine.source_names(), vec!["file", "http"]);

    let results = engine.search("iceland").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].slug, "iceland");
}

#[tokio::test]
async fn test_http_source_sends_cache_directive() {
    let (origin, seen) = spawn_origin(artifact_bytes(OutputFormat::V3)).await;
    let source = HttpSource::new(&origin, "/search-index.json", Duration::from_secs(5)).unwrap();
    assert_eq!(source.url(), format!("{}/search-index.json", origin));

    let artifact = source.fetch().await.unwrap();
    assert_eq!(artifact.doc_count(), 3);
    assert_eq!(*seen.lock(), vec!["public, max-age=3600".to_string()]);
}

#[tokio::test]
async fn test_http_error_status_is_reported() {
    let (origin, _) = spawn_origin(Vec::new()).await;
    let source = HttpSource::new(&origin, "/missing.json", Duration::from_secs(5)).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, AcquisitionError::Status(code) if code == StatusCode::NOT_FOUND.as_u16()));
}

#[tokio::test]
async fn test_unreachable_origin_degrades_to_empty() {
    // Bind and drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ServeConfig {
        index_path: None,
        origin: Some(format!("http://{}", addr)),
        http_timeout: Duration::from_secs(2),
        ..ServeConfig::default()
    };
    let engine = QueryEngine::from_config(&config).unwrap();
    assert!(engine.search("rust").await.is_empty());
    assert_eq!(engine.artifact().await.doc_count(), 0);
}
