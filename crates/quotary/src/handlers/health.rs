//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Readiness probe (runs a query against the database)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Readiness probe.
///
/// Runs a trivial query to verify the database is reachable.
/// Returns 200 if healthy, 503 if the database cannot be queried.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.author_repo.list_authors().await {
        Ok(authors) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "authors": authors.len(),
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "unavailable",
                "error": e.to_string(),
            })),
        )
            .into_response(),
    }
}
