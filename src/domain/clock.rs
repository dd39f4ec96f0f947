//! Source of "today" for date validation.
//!
//! Services receive a [`Clock`] instead of reading the system time so that
//! the default minimum booking date is injectable and tests stay
//! deterministic.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// The current calendar day in the caller's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Reads the host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
