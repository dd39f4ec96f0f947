//! DTOs for the stateless price calculation endpoint.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::pricing::RateSchedule;

/// Rates and dates to price without looking up a vehicle.
///
/// Rates are capped at [`crate::domain::pricing::MAX_RATE`].
#[derive(Debug, Deserialize, Validate)]
pub struct PriceRequest {
    #[validate(range(min = 0.0, max = 1000000.0, message = "daily_rate must be between 0 and 1,000,000"))]
    pub daily_rate: f64,

    #[validate(range(min = 0.0, max = 1000000.0, message = "weekly_rate must be between 0 and 1,000,000"))]
    pub weekly_rate: Option<f64>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}

impl PriceRequest {
    pub fn rates(&self) -> RateSchedule {
        RateSchedule::new(self.daily_rate, self.weekly_rate)
    }
}
