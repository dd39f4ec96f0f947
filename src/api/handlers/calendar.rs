//! Handler for the per-vehicle month calendar.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Datelike;

use crate::api::dto::calendar::{CalendarQuery, CalendarResponse};
use crate::api::extract::ApiQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns per-day occupancy for one month.
///
/// # Endpoint
///
/// `GET /api/vehicles/{id}/calendar?year=2025&month=1`
///
/// `year` and `month` default to the current month.
///
/// # Errors
///
/// - **400** month outside `1..=12`, or a non-numeric `year`/`month`
/// - **404** unknown vehicle
/// - **502** backend failure
pub async fn calendar_handler(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    ApiQuery(query): ApiQuery<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = state.clock.today();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let days = state
        .availability_service
        .calendar(&vehicle_id, year, month)
        .await?;

    Ok(Json(CalendarResponse {
        vehicle_id,
        year,
        month,
        occupied_days: days.iter().filter(|d| d.occupied).count(),
        days,
    }))
}
