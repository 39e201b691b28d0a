//! Catalog administration handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use courtbook_entity::resource::{
    Coach, Court, CreateCoach, CreateCourt, CreateEquipment, Equipment, ResourceType,
};

use crate::dto::request::{CreateCoachRequest, CreateCourtRequest, CreateEquipmentRequest};
use crate::dto::response::{ApiResponse, SuccessResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/admin/courts
pub async fn create_court(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCourtRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Court>>), ApiError> {
    let court = state
        .catalog_service
        .create_court(CreateCourt {
            name: req.name,
            court_type: req.court_type,
            base_price_per_hour: req.base_price_per_hour,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(court))))
}

/// DELETE /api/admin/courts/{id}
pub async fn delete_court(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.catalog_service.delete(ResourceType::Court, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/admin/coaches
pub async fn create_coach(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCoachRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Coach>>), ApiError> {
    let coach = state
        .catalog_service
        .create_coach(CreateCoach {
            name: req.name,
            bio: req.bio,
            hourly_rate: req.hourly_rate,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(coach))))
}

/// DELETE /api/admin/coaches/{id}
pub async fn delete_coach(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.catalog_service.delete(ResourceType::Coach, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/admin/equipment
pub async fn create_equipment(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEquipmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Equipment>>), ApiError> {
    let equipment = state
        .catalog_service
        .create_equipment(CreateEquipment {
            name: req.name,
            total_quantity: req.total_quantity,
            price_per_use: req.price_per_use,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(equipment))))
}

/// DELETE /api/admin/equipment/{id}
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .catalog_service
        .delete(ResourceType::Equipment, id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
