//! Calendar-day date ranges.
//!
//! Every date handled by the pricing engine is a calendar day. Inputs that
//! carry a time of day are reduced to their day through [`CalendarDay`]
//! before they reach a [`DateRange`], and day counts are computed on
//! UTC-midnight timestamps so that daylight-saving transitions never skew
//! the result.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;

use crate::domain::validation::ValidationError;

/// Milliseconds in one calendar day.
pub const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// A value that can be reduced to a calendar day.
///
/// Zoned timestamps resolve to the day in their own offset, which is the day
/// the user picked in their local calendar.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Milliseconds since the Unix epoch at UTC midnight of `day`.
pub fn midnight_utc_millis(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// An ordered, inclusive span of calendar days.
///
/// The only ways to build one check `start <= end`, so every `DateRange`
/// in circulation is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    #[serde(rename = "start_date")]
    start: NaiveDate,
    #[serde(rename = "end_date")]
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, normalising both ends to calendar days.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOrder`] when `end` precedes `start`.
    pub fn new(start: impl CalendarDay, end: impl CalendarDay) -> Result<Self, ValidationError> {
        let start = start.calendar_day();
        let end = end.calendar_day();

        if end < start {
            return Err(ValidationError::InvalidOrder { start, end });
        }

        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    pub fn single_day(day: impl CalendarDay) -> Self {
        let day = day.calendar_day();
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Duration of the range in days.
    ///
    /// This is the ceiling of the millisecond distance between the two
    /// UTC-midnight timestamps, not an inclusive count: Monday to Wednesday
    /// is two days, and a single-day range is zero.
    pub fn days(&self) -> u32 {
        let diff_ms = midnight_utc_millis(self.end) - midnight_utc_millis(self.start);
        let whole = diff_ms.div_euclid(ONE_DAY_MS);
        let days = if diff_ms.rem_euclid(ONE_DAY_MS) > 0 {
            whole + 1
        } else {
            whole
        };

        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// Returns true if `day` falls within the range, ends included.
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Iterates every calendar day of the range, ends included.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.start;
        let end = self.end;
        (0..=u64::from(self.days()))
            .filter_map(move |offset| start.checked_add_days(Days::new(offset)))
            .take_while(move |day| *day <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_is_a_duration_not_an_inclusive_count() {
        // 2025-01-06 is a Monday
        let range = DateRange::new(date(2025, 1, 6), date(2025, 1, 8)).unwrap();
        assert_eq!(range.days(), 2);
    }

    #[test]
    fn test_single_day_range_has_zero_days() {
        let range = DateRange::single_day(date(2025, 3, 15));
        assert_eq!(range.days(), 0);
        assert!(range.contains(date(2025, 3, 15)));
    }

    #[test]
    fn test_days_across_dst_transition() {
        // Spring-forward in most of Europe and North America happens in March
        let range = DateRange::new(date(2025, 3, 8), date(2025, 3, 31)).unwrap();
        assert_eq!(range.days(), 23);

        let range = DateRange::new(date(2025, 10, 20), date(2025, 11, 10)).unwrap();
        assert_eq!(range.days(), 21);
    }

    #[test]
    fn test_days_across_year_boundary() {
        let range = DateRange::new(date(2024, 12, 28), date(2025, 1, 4)).unwrap();
        assert_eq!(range.days(), 7);
    }

    #[test]
    fn test_time_of_day_is_stripped() {
        let start = date(2025, 1, 1).and_hms_opt(18, 30, 0).unwrap();
        let end = date(2025, 1, 3).and_hms_opt(6, 0, 0).unwrap();

        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start(), date(2025, 1, 1));
        assert_eq!(range.end(), date(2025, 1, 3));
        assert_eq!(range.days(), 2);
    }

    #[test]
    fn test_zoned_timestamp_uses_its_local_day() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        // 23:00 on Jan 1 in UTC-5 is already Jan 2 in UTC
        let local = offset.with_ymd_and_hms(2025, 1, 1, 23, 0, 0).unwrap();
        assert_eq!(local.calendar_day(), date(2025, 1, 1));
        assert_eq!(local.with_timezone(&Utc).calendar_day(), date(2025, 1, 2));
    }

    #[test]
    fn test_new_rejects_reversed_range() {
        let err = DateRange::new(date(2025, 1, 5), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOrder { .. }));
    }

    #[test]
    fn test_iter_days_is_inclusive() {
        let range = DateRange::new(date(2025, 2, 27), date(2025, 3, 2)).unwrap();
        let days: Vec<_> = range.iter_days().collect();

        assert_eq!(
            days,
            vec![
                date(2025, 2, 27),
                date(2025, 2, 28),
                date(2025, 3, 1),
                date(2025, 3, 2)
            ]
        );
    }

    #[test]
    fn test_midnight_utc_millis() {
        assert_eq!(midnight_utc_millis(date(1970, 1, 2)), ONE_DAY_MS);
    }
}
