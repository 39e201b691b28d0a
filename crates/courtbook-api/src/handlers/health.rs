//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{DatabaseHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/db
pub async fn health_db(
    State(state): State<AppState>,
) -> (StatusCode, Json<DatabaseHealthResponse>) {
    match state.db.health_check().await {
        Ok(true) => (
            StatusCode::OK,
            Json(DatabaseHealthResponse {
                status: "ok".to_string(),
                database: "connected".to_string(),
            }),
        ),
        Ok(false) | Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(DatabaseHealthResponse {
                status: "degraded".to_string(),
                database: "unreachable".to_string(),
            }),
        ),
    }
}
