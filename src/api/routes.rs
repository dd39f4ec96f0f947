//! API route configuration.

use crate::api::handlers::{
    availability_handler, calendar_handler, price_handler, quote_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Pricing and availability routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /price`                   - Cost for explicit rates and dates
/// - `POST /quote`                   - Quote for a backend vehicle
/// - `POST /availability`            - Candidate range vs existing bookings
/// - `GET  /vehicles/{id}/calendar`  - Per-day occupancy for one month
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/price", post(price_handler))
        .route("/quote", post(quote_handler))
        .route("/availability", post(availability_handler))
        .route("/vehicles/{id}/calendar", get(calendar_handler))
}
