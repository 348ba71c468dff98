//! Artifact reuse inside the TTL window, reacquisition after it.

use std::sync::Arc;
use std::time::Duration;

use crate::common::{sample_posts, CountingSource, FailingSource};
use folio::{build_from_posts, OutputFormat, QueryEngine};

const TTL: Duration = Duration::from_secs(300);

fn engine() -> (QueryEngine, folio::testing::CallCounter) {
    let (source, calls) = CountingSource::new(build_from_posts(&sample_posts(), OutputFormat::V3));
    (QueryEngine::new(vec![Box::new(source)], TTL), calls)
}

#[tokio::test(start_paused = true)]
async fn test_queries_within_ttl_share_artifact() {
    let (engine, calls) = engine();

    let first = engine.artifact().await;
    tokio::time::advance(Duration::from_millis(1)).await;
    let second = engine.artifact().await;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_query_after_ttl_reacquires() {
    let (engine, calls) = engine();

    assert_eq!(engine.search("rust").await.len(), 1);
    tokio::time::advance(TTL - Duration::from_secs(1)).await;
    assert_eq!(engine.search("rust").await.len(), 1);
    assert_eq!(calls.get(), 1);

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(engine.search("rust").await.len(), 1);
    assert_eq!(calls.get(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_empty_corpus_is_cached_too() {
    let (failing, calls) = FailingSource::new("offline");
    let engine = QueryEngine::new(vec![Box::new(failing)], TTL);

    assert!(engine.search("rust").await.is_empty());
    assert!(engine.search("iceland").await.is_empty());
    assert_eq!(calls.get(), 1);

    tokio::time::advance(TTL).await;
    assert!(engine.search("rust").await.is_empty());
    assert_eq!(calls.get(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_cache_forces_reload() {
    let (engine, calls) = engine();
    engine.artifact().await;
    engine.cache().clear();
    engine.artifact().await;
    assert_eq!(calls.get(), 2);
}
