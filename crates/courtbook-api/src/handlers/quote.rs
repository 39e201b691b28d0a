//! Price quote handler.

use axum::Json;
use axum::extract::State;

use courtbook_service::PriceQuote;

use crate::dto::request::QuoteRequest;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/quote
pub async fn quote(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<QuoteRequest>,
) -> Result<Json<PriceQuote>, ApiError> {
    let (start, end) = req.window()?;
    let quote = state.pricing_engine.quote(&req.items, start, end).await?;
    Ok(Json(quote))
}
