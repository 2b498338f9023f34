//! Summary engine entry points.
//!
//! # Responsibility
//! - Serve the single-day summary and the recent-window series.
//!
//! # Invariants
//! - Each call performs exactly one store fetch and one grouping pass.
//! - "Today" is read once per call, before the fetch.
//! - Results never include dates outside the requested day or window.

use crate::model::calendar_date::CalendarDate;
use crate::model::daily_summary::DailySummary;
use crate::repo::RepoError;
use crate::summary::clock::{Clock, UtcClock};
use crate::summary::group::{group_by_date, summaries_descending};
use crate::summary::window::{RecentWindow, DEFAULT_RECENT_DAYS};
use crate::summary::{EggRecordSource, SummaryError, SummaryResult};
use log::{debug, error, warn};
use std::time::Instant;

/// Computes day-level egg summaries from a record source.
pub struct SummaryEngine<S, C = UtcClock> {
    source: S,
    clock: C,
}

impl<S: EggRecordSource> SummaryEngine<S, UtcClock> {
    /// Creates an engine whose "today" is the current UTC day.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, UtcClock)
    }
}

impl<S: EggRecordSource, C: Clock> SummaryEngine<S, C> {
    pub fn with_clock(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    /// Returns the summary for exactly `date`.
    ///
    /// A day without records yields a zero-valued summary.
    pub fn daily_summary(&self, date: CalendarDate) -> SummaryResult<DailySummary> {
        let started_at = Instant::now();
        let records = self
            .source
            .fetch_by_date(date)
            .map_err(|err| storage_failure("daily_summary", started_at, err))?;

        let summary = group_by_date(records.iter().filter(|record| record.date == date))
            .remove(&date)
            .map_or_else(|| DailySummary::empty(date), |tally| tally.into_summary(date));

        debug!(
            "event=daily_summary module=summary status=ok date={} records={} duration_ms={}",
            date,
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(summary)
    }

    /// Returns summaries for the last `days` days including today, most
    /// recent first. `None` means [`DEFAULT_RECENT_DAYS`].
    ///
    /// Days without records are omitted, so the result may be shorter than
    /// `days` or empty.
    pub fn recent_summaries(&self, days: Option<i64>) -> SummaryResult<Vec<DailySummary>> {
        let started_at = Instant::now();
        let requested = days.unwrap_or(DEFAULT_RECENT_DAYS);
        let window = RecentWindow::ending_on(self.clock.today(), requested).map_err(|err| {
            warn!(
                "event=recent_summaries module=summary status=error error_code=invalid_window_size days={requested}"
            );
            err
        })?;

        let records = self
            .source
            .fetch_by_date_range(window.start(), window.end())
            .map_err(|err| storage_failure("recent_summaries", started_at, err))?;

        let groups = group_by_date(records.iter().filter(|record| window.contains(record.date)));
        let summaries = summaries_descending(groups);

        debug!(
            "event=recent_summaries module=summary status=ok start={} end={} records={} days_with_records={} duration_ms={}",
            window.start(),
            window.end(),
            records.len(),
            summaries.len(),
            started_at.elapsed().as_millis()
        );
        Ok(summaries)
    }
}

fn storage_failure(operation: &str, started_at: Instant, err: RepoError) -> SummaryError {
    error!(
        "event={} module=summary status=error duration_ms={} error_code=storage_unavailable error={}",
        operation,
        started_at.elapsed().as_millis(),
        err
    );
    SummaryError::StorageUnavailable(err)
}
