//! Public catalog reads.

use axum::Json;
use axum::extract::State;

use courtbook_entity::resource::{Coach, Court, Equipment};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/courts
pub async fn list_courts(State(state): State<AppState>) -> Result<Json<Vec<Court>>, ApiError> {
    Ok(Json(state.catalog_service.courts().await?))
}

/// GET /api/coaches
pub async fn list_coaches(State(state): State<AppState>) -> Result<Json<Vec<Coach>>, ApiError> {
    Ok(Json(state.catalog_service.coaches().await?))
}

/// GET /api/equipment
pub async fn list_equipment(
    State(state): State<AppState>,
) -> Result<Json<Vec<Equipment>>, ApiError> {
    Ok(Json(state.catalog_service.equipment().await?))
}
