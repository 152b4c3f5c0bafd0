//! Wall-clock seam for age computation.
//!
//! # Responsibility
//! - Supply the current UTC calendar date to age-derived computations.
//! - Let tests pin "today" instead of depending on execution time.
//!
//! # Invariants
//! - `today()` is always expressed in UTC.

use chrono::{Datelike, NaiveDate, Utc};

/// Source of the current calendar date.
pub trait Clock {
    /// Current calendar date in UTC.
    fn today(&self) -> NaiveDate;

    /// Current calendar year in UTC.
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
