//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — always reports `ok`; never touches the item source.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
