//! Domain model for flock and laying records.
//!
//! # Responsibility
//! - Define the records persisted by the store (`Chicken`, `EggRecord`).
//! - Define the derived `DailySummary` produced by the summary engine.
//! - Own the normalized `CalendarDate` used for every day-level key.
//!
//! # Invariants
//! - Dates carry no time-of-day or timezone component.
//! - Quantities are non-negative by construction (`u32`).

pub mod calendar_date;
pub mod chicken;
pub mod daily_summary;
pub mod egg_record;
