//! DTOs for the month calendar endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::availability::CalendarDay;

/// Month selection; both default to the current month.
///
/// Uses `serde_with` to parse the numbers from query strings.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub year: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub month: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub vehicle_id: String,
    pub year: i32,
    pub month: u32,
    pub occupied_days: usize,
    pub days: Vec<CalendarDay>,
}
