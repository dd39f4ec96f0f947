//! Availability and conflict detection against existing bookings.
//!
//! All boundaries are inclusive: a candidate range that starts on the day an
//! existing booking ends is a conflict.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::date_range::DateRange;
use crate::domain::validation::ValidationError;

/// The span of an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccupiedRange {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl OccupiedRange {
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
        }
    }

    /// Returns true if `day` falls on or between the booking's ends.
    pub fn covers(&self, day: NaiveDate) -> bool {
        day >= self.start_date && day <= self.end_date
    }

    /// Returns true if the booking shares at least one day with `range`.
    pub fn overlaps(&self, range: &DateRange) -> bool {
        overlaps(range.start(), range.end(), self.start_date, self.end_date)
    }
}

/// Inclusive overlap test between `[a_start, a_end]` and `[b_start, b_end]`.
///
/// Symmetric in its two ranges.
pub fn overlaps(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start <= b_end && a_end >= b_start
}

/// Outcome of checking a candidate range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub available: bool,
    /// Overlapping bookings in the order they were supplied.
    pub conflicts: Vec<OccupiedRange>,
}

impl Availability {
    fn from_conflicts(conflicts: Vec<OccupiedRange>) -> Self {
        Self {
            available: conflicts.is_empty(),
            conflicts,
        }
    }
}

/// Checks `candidate` against every occupied range.
pub fn is_available(candidate: &DateRange, occupied: &[OccupiedRange]) -> Availability {
    let conflicts = occupied
        .iter()
        .filter(|range| range.overlaps(candidate))
        .cloned()
        .collect();

    Availability::from_conflicts(conflicts)
}

/// Returns true if any occupied range covers `day`.
pub fn is_day_occupied(day: NaiveDate, occupied: &[OccupiedRange]) -> bool {
    occupied.iter().any(|range| range.covers(day))
}

/// One cell of a month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub occupied: bool,
}

/// An immutable set of bookings for one vehicle.
///
/// Cloning is cheap; the set is shared, so a checker can be reused for any
/// number of candidate ranges during a session.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityChecker {
    occupied: Arc<[OccupiedRange]>,
}

impl AvailabilityChecker {
    pub fn new(occupied: impl Into<Arc<[OccupiedRange]>>) -> Self {
        Self {
            occupied: occupied.into(),
        }
    }

    pub fn occupied(&self) -> &[OccupiedRange] {
        &self.occupied
    }

    pub fn check(&self, candidate: &DateRange) -> Availability {
        is_available(candidate, &self.occupied)
    }

    pub fn is_day_occupied(&self, day: NaiveDate) -> bool {
        is_day_occupied(day, &self.occupied)
    }

    /// Marks every day of a calendar month as free or occupied.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMonth`] if `month` is not 1-12 or the
    /// year is outside the supported calendar.
    pub fn month_calendar(&self, year: i32, month: u32) -> Result<Vec<CalendarDay>, ValidationError> {
        let month_range = month_range(year, month)?;

        Ok(month_range
            .iter_days()
            .map(|date| CalendarDay {
                date,
                occupied: self.is_day_occupied(date),
            })
            .collect())
    }
}

/// The first through last day of a calendar month.
fn month_range(year: i32, month: u32) -> Result<DateRange, ValidationError> {
    let invalid = || ValidationError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(invalid)?;

    DateRange::new(first, last)
}
