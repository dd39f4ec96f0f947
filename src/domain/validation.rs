//! Date range validation for booking forms.

use chrono::NaiveDate;

use crate::domain::clock::Clock;
use crate::domain::date_range::{CalendarDay, DateRange};

/// Recoverable input errors raised while building date ranges.
///
/// Each variant maps to a form validation message; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("end date {end} is before start date {start}")]
    InvalidOrder { start: NaiveDate, end: NaiveDate },

    #[error("start date {start} is before the earliest bookable date {min_date}")]
    BeforeMinimum {
        start: NaiveDate,
        min_date: NaiveDate,
    },

    #[error("{year}-{month:02} is not a valid calendar month")]
    InvalidMonth { year: i32, month: u32 },
}

impl ValidationError {
    /// Stable machine-readable reason used in API error details.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidOrder { .. } => "invalid_order",
            Self::BeforeMinimum { .. } => "before_minimum",
            Self::InvalidMonth { .. } => "invalid_month",
        }
    }
}

/// Validates a candidate start/end pair against a minimum start date.
///
/// Both dates are reduced to calendar days first. Ordering is checked before
/// the minimum, so a reversed range always reports
/// [`ValidationError::InvalidOrder`].
///
/// # Errors
///
/// - [`ValidationError::InvalidOrder`] when `end < start`
/// - [`ValidationError::BeforeMinimum`] when `start < min_date`
pub fn validate(
    start: impl CalendarDay,
    end: impl CalendarDay,
    min_date: impl CalendarDay,
) -> Result<DateRange, ValidationError> {
    let range = DateRange::new(start, end)?;
    let min_date = min_date.calendar_day();

    if range.start() < min_date {
        return Err(ValidationError::BeforeMinimum {
            start: range.start(),
            min_date,
        });
    }

    Ok(range)
}

/// A validator bound to a fixed minimum start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeValidator {
    min_date: NaiveDate,
}

impl DateRangeValidator {
    pub fn new(min_date: impl CalendarDay) -> Self {
        Self {
            min_date: min_date.calendar_day(),
        }
    }

    /// A validator whose minimum is the clock's current day.
    pub fn today(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// See [`validate`].
    pub fn validate(
        &self,
        start: impl CalendarDay,
        end: impl CalendarDay,
    ) -> Result<DateRange, ValidationError> {
        validate(start, end, self.min_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reversed_range_is_invalid_order() {
        let err = validate(date(2025, 1, 5), date(2025, 1, 1), date(2025, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidOrder {
                start: date(2025, 1, 5),
                end: date(2025, 1, 1)
            }
        );
        assert_eq!(err.reason(), "invalid_order");
    }

    #[test]
    fn test_ordering_holds_for_every_end_before_start() {
        let start = date(2025, 6, 15);
        let min = date(2025, 1, 1);

        for offset in 1..=60 {
            let end = start - chrono::Days::new(offset);
            assert!(matches!(
                validate(start, end, min),
                Err(ValidationError::InvalidOrder { .. })
            ));
        }

        for offset in 0..=60 {
            let end = start + chrono::Days::new(offset);
            assert!(validate(start, end, min).is_ok());
        }
    }

    #[test]
    fn test_order_is_checked_before_minimum() {
        let err = validate(date(2024, 12, 20), date(2024, 12, 10), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOrder { .. }));
    }

    #[test]
    fn test_start_before_minimum() {
        let err = validate(date(2024, 12, 31), date(2025, 1, 3), date(2025, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BeforeMinimum {
                start: date(2024, 12, 31),
                min_date: date(2025, 1, 1)
            }
        );
        assert_eq!(err.reason(), "before_minimum");
    }

    #[test]
    fn test_start_on_minimum_is_allowed() {
        let range = validate(date(2025, 1, 1), date(2025, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(range.days(), 0);
    }

    #[test]
    fn test_minimum_time_of_day_is_ignored() {
        let min = date(2025, 1, 1).and_hms_opt(15, 45, 0).unwrap();
        let start = date(2025, 1, 1).and_hms_opt(9, 0, 0).unwrap();

        let range = validate(start, date(2025, 1, 4), min).unwrap();

        assert_eq!(range.start(), date(2025, 1, 1));
        assert_eq!(range.days(), 3);
    }

    #[test]
    fn test_validator_defaults_to_clock_today() {
        let clock = FixedClock::new(date(2025, 3, 10));
        let validator = DateRangeValidator::today(&clock);

        assert_eq!(validator.min_date(), date(2025, 3, 10));
        assert!(validator.validate(date(2025, 3, 10), date(2025, 3, 12)).is_ok());
        assert!(matches!(
            validator.validate(date(2025, 3, 9), date(2025, 3, 12)),
            Err(ValidationError::BeforeMinimum { .. })
        ));
    }
}
