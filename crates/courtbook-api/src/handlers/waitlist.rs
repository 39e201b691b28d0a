//! Waitlist handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use courtbook_entity::waitlist::WaitlistEntry;

use crate::dto::request::{JoinWaitlistRequest, UserQuery};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/waitlist
pub async fn join_waitlist(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<JoinWaitlistRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.waitlist_service.join(req.into_entry()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Added to waitlist")),
    ))
}

/// GET /api/waitlist?user_name=
pub async fn list_waitlist(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<WaitlistEntry>>, ApiError> {
    let user_name = query.require()?;
    Ok(Json(state.waitlist_service.entries_for(user_name).await?))
}
