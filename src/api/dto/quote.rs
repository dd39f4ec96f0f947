//! DTOs for the vehicle quote endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::cost::{ConflictItem, CostSummary};
use crate::application::services::Quote;
use crate::domain::pricing::format_currency;

/// Request to quote one vehicle.
///
/// Dates are required for rental listings and ignored for sale listings.
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1, max = 64))]
    pub vehicle_id: String,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

impl QuoteRequest {
    /// Both dates, or `None` if either is missing.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date.zip(self.end_date)
    }
}

/// Quote result, discriminated by `kind`.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteResponse {
    Rental {
        vehicle_id: String,
        #[serde(flatten)]
        cost: CostSummary,
        available: bool,
        conflicts: Vec<ConflictItem>,
    },
    Sale {
        vehicle_id: String,
        total: f64,
        formatted_total: String,
    },
}

impl QuoteResponse {
    pub fn from_quote(quote: Quote, currency_symbol: &str) -> Self {
        match quote {
            Quote::Rental {
                vehicle_id,
                range,
                breakdown,
                availability,
            } => QuoteResponse::Rental {
                vehicle_id,
                cost: CostSummary::new(&range, &breakdown, currency_symbol),
                available: availability.available,
                conflicts: availability
                    .conflicts
                    .into_iter()
                    .map(ConflictItem::from)
                    .collect(),
            },
            Quote::Sale { vehicle_id, total } => QuoteResponse::Sale {
                vehicle_id,
                total,
                formatted_total: format_currency(total, currency_symbol),
            },
        }
    }
}
