//! Handler for vehicle quotes.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::quote::{QuoteRequest, QuoteResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Quotes a backend vehicle.
///
/// # Endpoint
///
/// `POST /api/quote`
///
/// # Request Body
///
/// ```json
/// {
///   "vehicle_id": "64f1c2",
///   "start_date": "2025-01-01",
///   "end_date": "2025-01-04"
/// }
/// ```
///
/// # Response
///
/// Rental listings:
///
/// ```json
/// {
///   "kind": "rental",
///   "vehicle_id": "64f1c2",
///   "start_date": "2025-01-01",
///   "end_date": "2025-01-04",
///   "days": 3,
///   "weeks": 0,
///   "remaining_days": 3,
///   "billing": "daily",
///   "total": 150.0,
///   "formatted_total": "$150",
///   "available": true,
///   "conflicts": []
/// }
/// ```
///
/// Sale listings ignore the dates:
///
/// ```json
/// { "kind": "sale", "vehicle_id": "64f1c3", "total": 18500.0, "formatted_total": "$18,500" }
/// ```
///
/// # Errors
///
/// - **400** missing or invalid dates for a rental
/// - **404** unknown vehicle
/// - **502** backend failure
pub async fn quote_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    payload.validate()?;

    let quote = state
        .quote_service
        .quote(&payload.vehicle_id, payload.dates())
        .await?;

    Ok(Json(QuoteResponse::from_quote(
        quote,
        &state.currency_symbol,
    )))
}
