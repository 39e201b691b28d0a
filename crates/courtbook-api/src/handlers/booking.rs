//! Booking, cancellation, calendar, and history handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use courtbook_entity::booking::{BookingHistoryEntry, BusySlot};

use crate::dto::request::{BusySlotsQuery, CreateBookingRequest, UserQuery};
use crate::dto::response::{BookingCreatedResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiError> {
    let receipt = state
        .booking_coordinator
        .create_booking(req.into_new_booking()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking successful".to_string(),
            booking_id: receipt.booking_id,
            total_price: receipt.total_price,
        }),
    ))
}

/// GET /api/bookings?date=YYYY-MM-DD[&resource_type=&resource_id=]
pub async fn busy_slots(
    State(state): State<AppState>,
    Query(query): Query<BusySlotsQuery>,
) -> Result<Json<Vec<BusySlot>>, ApiError> {
    let (date, resource_type, resource_id) = query.parse()?;
    let slots = state
        .history_service
        .busy_slots(date, resource_type, resource_id)
        .await?;
    Ok(Json(slots))
}

/// POST /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.cancellation_service.cancel(id).await?;
    Ok(Json(MessageResponse::new(
        "Booking cancelled. Waitlist processed.",
    )))
}

/// GET /api/my-bookings?user_name=
pub async fn my_bookings(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<BookingHistoryEntry>>, ApiError> {
    let user_name = query.require()?;
    Ok(Json(state.history_service.history(user_name).await?))
}
