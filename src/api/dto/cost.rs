//! Response fragments shared by the pricing endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::availability::OccupiedRange;
use crate::domain::date_range::DateRange;
use crate::domain::pricing::{Billing, CostBreakdown, format_currency};

/// Itemised rental cost as returned to booking forms.
///
/// `formatted_total` is `null` while the range cannot be priced, so the UI
/// can show a neutral placeholder instead of `$0`.
#[derive(Debug, Serialize)]
pub struct CostSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub weeks: u32,
    pub remaining_days: u32,
    pub billing: Billing,
    pub total: f64,
    pub formatted_total: Option<String>,
}

impl CostSummary {
    pub fn new(range: &DateRange, breakdown: &CostBreakdown, currency_symbol: &str) -> Self {
        Self {
            start_date: range.start(),
            end_date: range.end(),
            days: breakdown.days,
            weeks: breakdown.weeks,
            remaining_days: breakdown.remaining_days,
            billing: breakdown.billing,
            total: breakdown.total,
            formatted_total: breakdown
                .is_priced()
                .then(|| format_currency(breakdown.total, currency_symbol)),
        }
    }
}

/// An existing booking that overlaps the requested range.
#[derive(Debug, Serialize)]
pub struct ConflictItem {
    pub booking_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<OccupiedRange> for ConflictItem {
    fn from(range: OccupiedRange) -> Self {
        Self {
            booking_id: range.id,
            start_date: range.start_date,
            end_date: range.end_date,
        }
    }
}
