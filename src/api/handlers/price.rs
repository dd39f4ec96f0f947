//! Handler for stateless price calculation.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::cost::CostSummary;
use crate::api::dto::price::PriceRequest;
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Prices a date range under caller-supplied rates.
///
/// # Endpoint
///
/// `POST /api/price`
///
/// # Request Body
///
/// ```json
/// {
///   "daily_rate": 50,
///   "weekly_rate": 300,
///   "start_date": "2025-01-01",
///   "end_date": "2025-01-08"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "start_date": "2025-01-01",
///   "end_date": "2025-01-08",
///   "days": 7,
///   "weeks": 1,
///   "remaining_days": 0,
///   "billing": "weekly",
///   "total": 300.0,
///   "formatted_total": "$300"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for negative rates, reversed dates or a start
/// date in the past.
pub async fn price_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PriceRequest>,
) -> Result<Json<CostSummary>, AppError> {
    payload.validate()?;

    let (range, breakdown) =
        state
            .quote_service
            .price(&payload.rates(), payload.start_date, payload.end_date)?;

    Ok(Json(CostSummary::new(
        &range,
        &breakdown,
        &state.currency_symbol,
    )))
}
