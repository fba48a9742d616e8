use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;
use triage_core::storage::Store;

/// Matches the dashboard's page size.
const RECENT_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct AppState {
    store: Store,
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub total_failures: u64,
    pub top_failure_categories: BTreeMap<String, f64>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(store: Store) -> Router {
    Router::new()
        .route("/api/failures", get(get_failures))
        .route("/api/metrics", get(get_metrics))
        .with_state(AppState { store })
}

pub async fn serve(db: &Path, addr: SocketAddr) -> anyhow::Result<()> {
    let store = Store::open(db)?;
    // Idempotent, so the API can come up before any triage run has happened.
    store.init_schema()?;

    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(event = "api_listening", addr = %addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// GET /api/failures — the 20 most recent records, newest first.
async fn get_failures(State(state): State<AppState>) -> Response {
    match state.store.recent_failures(RECENT_LIMIT) {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/metrics — total row count and category share percentages.
async fn get_metrics(State(state): State<AppState>) -> Response {
    match state.store.category_distribution() {
        Ok((total, dist)) => Json(MetricsResponse {
            total_failures: total,
            top_failure_categories: dist,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: anyhow::Error) -> Response {
    tracing::warn!(event = "api_query_failed", error = %e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
