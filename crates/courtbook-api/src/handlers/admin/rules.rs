//! Pricing rule administration handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use courtbook_entity::pricing::PricingRule;

use crate::dto::request::{CreateRuleRequest, ToggleRuleRequest};
use crate::dto::response::{ApiResponse, SuccessResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /api/admin/rules
pub async fn list_rules(
    State(state): State<AppState>,
) -> Result<Json<Vec<PricingRule>>, ApiError> {
    Ok(Json(state.rule_service.list().await?))
}

/// POST /api/admin/rules
pub async fn create_rule(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRuleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PricingRule>>), ApiError> {
    let rule = state.rule_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(rule))))
}

/// PATCH /api/admin/rules/{id}
pub async fn toggle_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<ToggleRuleRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.rule_service.set_active(id, req.is_active).await?;
    Ok(Json(SuccessResponse::ok()))
}
