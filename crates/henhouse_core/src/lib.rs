//! Core domain logic for the henhouse laying tracker.
//! Owns the record store and the daily aggregation engine.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod summary;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::calendar_date::{CalendarDate, InvalidDateFormat};
pub use model::chicken::{Chicken, ChickenId, ChickenPatch, ChickenValidationError, NewChicken};
pub use model::daily_summary::DailySummary;
pub use model::egg_record::{EggRecord, EggRecordId, EggRecordPatch, NewEggRecord};
pub use repo::chicken_repo::{ChickenRepository, SqliteChickenRepository};
pub use repo::egg_record_repo::{EggRecordQuery, EggRecordRepository, SqliteEggRecordRepository};
pub use repo::{RepoError, RepoResult};
pub use service::chicken_service::ChickenService;
pub use service::egg_record_service::EggRecordService;
pub use summary::{
    Clock, EggRecordSource, FixedClock, RecentWindow, SummaryEngine, SummaryError, SummaryResult,
    UtcClock, DEFAULT_RECENT_DAYS,
};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
