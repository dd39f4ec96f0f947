//! Handler for availability checks.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::availability::{AvailabilityRequest, AvailabilityResponse};
use crate::api::dto::cost::ConflictItem;
use crate::api::extract::ApiJson;
use crate::domain::date_range::DateRange;
use crate::error::AppError;
use crate::state::AppState;

/// Checks a candidate range against a vehicle's existing bookings.
///
/// # Endpoint
///
/// `POST /api/availability`
///
/// Only the date order is validated here; past ranges may be checked.
/// Overlaps are reported in the body with `available: false`, not as an
/// error status.
///
/// # Response
///
/// ```json
/// {
///   "vehicle_id": "64f1c2",
///   "start_date": "2025-01-05",
///   "end_date": "2025-01-12",
///   "available": false,
///   "conflicts": [
///     { "booking_id": "b1", "start_date": "2025-01-10", "end_date": "2025-01-15" }
///   ]
/// }
/// ```
pub async fn availability_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    payload.validate()?;

    let range = DateRange::new(payload.start_date, payload.end_date)?;
    let availability = state
        .availability_service
        .check(&payload.vehicle_id, &range)
        .await?;

    Ok(Json(AvailabilityResponse {
        vehicle_id: payload.vehicle_id,
        start_date: range.start(),
        end_date: range.end(),
        available: availability.available,
        conflicts: availability
            .conflicts
            .into_iter()
            .map(ConflictItem::from)
            .collect(),
    }))
}
