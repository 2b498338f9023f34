//! Trailing day window ending on a reference day.

use crate::model::calendar_date::CalendarDate;
use crate::summary::{SummaryError, SummaryResult};

/// Day count used when the caller does not ask for one.
pub const DEFAULT_RECENT_DAYS: i64 = 7;

/// Inclusive `[start, end]` range of `days` calendar days ending on `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentWindow {
    start: CalendarDate,
    end: CalendarDate,
    days: u64,
}

impl RecentWindow {
    /// Builds the window `[today - (days - 1), today]`.
    ///
    /// Fails with `InvalidWindowSize` when `days <= 0`. A window reaching
    /// past the earliest representable day is clamped to that day.
    pub fn ending_on(today: CalendarDate, days: i64) -> SummaryResult<Self> {
        let day_count = u64::try_from(days)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(SummaryError::InvalidWindowSize(days))?;
        let start = today
            .days_before(day_count - 1)
            .unwrap_or(CalendarDate::MIN);

        Ok(Self {
            start,
            end: today,
            days: day_count,
        })
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub const fn days(&self) -> u64 {
        self.days
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}
