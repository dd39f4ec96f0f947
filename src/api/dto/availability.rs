//! DTOs for the availability check endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::cost::ConflictItem;

/// Candidate range for one vehicle.
#[derive(Debug, Deserialize, Validate)]
pub struct AvailabilityRequest {
    #[validate(length(min = 1, max = 64))]
    pub vehicle_id: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available: bool,
    pub conflicts: Vec<ConflictItem>,
}
