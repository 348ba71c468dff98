// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface for the query engine.
//!
//! Two routes:
//!
//! - `GET /api/search?q=<query>` returns a JSON array of at most 50 post
//!   summaries. A missing, blank, or unparseable `q` yields `[]` with 200.
//!   When `q` repeats, the first value wins.
//! - `GET /healthz` returns `ok`.
//!
//! Search responses carry edge-cache directives; clients should not rely on
//! the exact values.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::CACHE_CONTROL;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::ServeConfig;
use crate::engine::QueryEngine;

pub const SEARCH_CACHE_CONTROL: &str =
    "public, max-age=0, s-maxage=600, stale-while-revalidate=86400";

/// Query-string pairs in request order.
type QueryPairs = Vec<(String, String)>;

fn first_q(pairs: QueryPairs) -> String {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "q").then_some(value))
        .unwrap_or_default()
}

/// Build the router around a shared engine.
pub fn router(engine: Arc<QueryEngine>) -> Router {
    Router::new()
        .route("/api/search", get(search_handler))
        .route("/healthz", get(healthz))
        .with_state(engine)
}

async fn search_handler(
    State(engine): State<Arc<QueryEngine>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> impl IntoResponse {
    let query = match params {
        Ok(Query(pairs)) => first_q(pairs),
        Err(rejection) => {
            debug!(error = %rejection, "unreadable query string; treating as empty");
            String::new()
        }
    };
    let results = engine.search(&query).await;
    ([(CACHE_CONTROL, SEARCH_CACHE_CONTROL)], Json(results))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: &ServeConfig) -> anyhow::Result<()> {
    let engine = Arc::new(QueryEngine::from_config(config)?);
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        sources = ?engine.source_names(),
        ttl_secs = config.cache_ttl.as_secs(),
        "search server listening"
    );
    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("search server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // A failed handler install leaves the server running until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
