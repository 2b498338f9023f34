//! Day-level rollup derived from egg records.

use crate::model::calendar_date::CalendarDate;
use serde::{Deserialize, Serialize};

/// Totals for one calendar day.
///
/// Never persisted; recomputed from current records on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: CalendarDate,
    /// Sum of all record quantities on `date`.
    pub total_eggs: u64,
    /// Distinct chickens with at least one record on `date`.
    pub chickens_laid: u64,
}

impl DailySummary {
    /// Zero-valued summary for a day without records.
    pub const fn empty(date: CalendarDate) -> Self {
        Self {
            date,
            total_eggs: 0,
            chickens_laid: 0,
        }
    }
}
