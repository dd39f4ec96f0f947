//! Rental cost calculation.
//!
//! # Billing rules
//!
//! Given a [`DateRange`] of `days` (see [`DateRange::days`]) and a
//! [`RateSchedule`]:
//!
//! 1. `days == 0` costs nothing (no range selected yet)
//! 2. a zero daily rate costs nothing (pricing unavailable)
//! 3. `days >= 7` with a positive weekly rate bills whole weeks at the weekly
//!    rate and the leftover days at the daily rate
//! 4. anything else bills every day at the daily rate
//!
//! A zero total therefore means "cannot price yet" rather than "free"; the
//! [`Billing::Unpriced`] marker on [`CostBreakdown`] makes that explicit.
//!
//! Amounts are whole currency units carried as `f64`. No rounding happens
//! here; [`format_currency`] rounds only for display.

use serde::{Deserialize, Serialize};

use crate::domain::date_range::DateRange;

pub const DAYS_PER_WEEK: u32 = 7;

/// Largest accepted daily or weekly rate. Keeps every total finite for any
/// representable date range.
pub const MAX_RATE: f64 = 1_000_000.0;

/// Daily and optional weekly rate for a rental listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub daily_rate: f64,
    #[serde(default)]
    pub weekly_rate: Option<f64>,
}

impl RateSchedule {
    pub fn new(daily_rate: f64, weekly_rate: Option<f64>) -> Self {
        Self {
            daily_rate,
            weekly_rate,
        }
    }

    /// A schedule with daily billing only.
    pub fn daily(daily_rate: f64) -> Self {
        Self::new(daily_rate, None)
    }

    /// The weekly rate, if one is set and positive.
    fn effective_weekly_rate(&self) -> Option<f64> {
        self.weekly_rate.filter(|rate| *rate > 0.0)
    }
}

/// How a quote was billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Billing {
    /// Zero-length range or zero daily rate; the total is 0.
    Unpriced,
    Daily,
    Weekly,
}

/// Itemised result of a rental cost calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub days: u32,
    pub weeks: u32,
    pub remaining_days: u32,
    pub billing: Billing,
    pub total: f64,
}

impl CostBreakdown {
    pub fn is_priced(&self) -> bool {
        self.billing != Billing::Unpriced && self.total.is_finite()
    }
}

/// Computes the itemised rental cost of `range` under `rates`.
pub fn cost_breakdown(range: &DateRange, rates: &RateSchedule) -> CostBreakdown {
    let days = range.days();

    if days == 0 || rates.daily_rate == 0.0 {
        return CostBreakdown {
            days,
            weeks: 0,
            remaining_days: 0,
            billing: Billing::Unpriced,
            total: 0.0,
        };
    }

    match rates.effective_weekly_rate() {
        Some(weekly_rate) if days >= DAYS_PER_WEEK => {
            let weeks = days / DAYS_PER_WEEK;
            let remaining_days = days % DAYS_PER_WEEK;
            CostBreakdown {
                days,
                weeks,
                remaining_days,
                billing: Billing::Weekly,
                total: f64::from(weeks) * weekly_rate
                    + f64::from(remaining_days) * rates.daily_rate,
            }
        }
        _ => CostBreakdown {
            days,
            weeks: 0,
            remaining_days: days,
            billing: Billing::Daily,
            total: f64::from(days) * rates.daily_rate,
        },
    }
}

/// Total rental cost of `range` under `rates`.
pub fn calculate_cost(range: &DateRange, rates: &RateSchedule) -> f64 {
    cost_breakdown(range, rates).total
}

/// Cost of a one-time purchase: the flat sale price, independent of dates.
pub fn sale_cost(price: f64) -> f64 {
    price
}

/// What a listing offers and at which price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Offer {
    Rental { rates: RateSchedule },
    Sale { price: f64 },
}

/// Formats an amount with no fractional digits, `,` thousands separators
/// and a currency symbol prefix.
///
/// Halves round away from zero: `1234.5` becomes `"$1,235"`. Non-finite
/// amounts render as `"n/a"`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{symbol}{grouped}")
}
