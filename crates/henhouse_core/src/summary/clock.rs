//! Reference "today" for window arithmetic.

use crate::model::calendar_date::CalendarDate;
use chrono::Utc;

/// Supplies the current calendar day.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Current day in UTC, independent of the host timezone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Utc::now().date_naive())
    }
}

/// Clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
