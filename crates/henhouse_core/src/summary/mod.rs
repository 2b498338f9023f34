//! Daily aggregation engine.
//!
//! # Responsibility
//! - Turn dated per-chicken egg records into day-level summaries.
//! - Derive the trailing window for recent-day series from an explicit
//!   UTC clock.
//!
//! # Invariants
//! - Stateless: every summary is computed from one fetch of current records.
//! - A day without records is data (zero summary or omission), never an error.
//! - Storage failures propagate as `StorageUnavailable` without retry.

use crate::model::calendar_date::CalendarDate;
use crate::model::egg_record::EggRecord;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod clock;
mod engine;
mod group;
mod window;

pub use clock::{Clock, FixedClock, UtcClock};
pub use engine::SummaryEngine;
pub use group::{group_by_date, summaries_descending, DayTally};
pub use window::{RecentWindow, DEFAULT_RECENT_DAYS};

pub type SummaryResult<T> = Result<T, SummaryError>;

/// Failures surfaced by the summary engine.
#[derive(Debug)]
pub enum SummaryError {
    /// Requested day count was zero or negative.
    InvalidWindowSize(i64),
    /// The record store could not serve the fetch.
    StorageUnavailable(RepoError),
}

impl Display for SummaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWindowSize(days) => {
                write!(f, "window size must be at least 1 day, got {days}")
            }
            Self::StorageUnavailable(err) => write!(f, "record store unavailable: {err}"),
        }
    }
}

impl Error for SummaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidWindowSize(_) => None,
            Self::StorageUnavailable(err) => Some(err),
        }
    }
}

/// Read contract the engine needs from the record store.
pub trait EggRecordSource {
    /// Returns every record dated exactly `date`.
    fn fetch_by_date(&self, date: CalendarDate) -> RepoResult<Vec<EggRecord>>;
    /// Returns every record dated within `[start, end]`.
    fn fetch_by_date_range(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> RepoResult<Vec<EggRecord>>;
}

impl<S: EggRecordSource + ?Sized> EggRecordSource for &S {
    fn fetch_by_date(&self, date: CalendarDate) -> RepoResult<Vec<EggRecord>> {
        (**self).fetch_by_date(date)
    }

    fn fetch_by_date_range(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> RepoResult<Vec<EggRecord>> {
        (**self).fetch_by_date_range(start, end)
    }
}
