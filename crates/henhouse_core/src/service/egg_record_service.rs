//! Egg record use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository existence checks.
//! - Service layer remains storage-agnostic.

use crate::model::calendar_date::CalendarDate;
use crate::model::chicken::ChickenId;
use crate::model::egg_record::{EggRecord, EggRecordId, EggRecordPatch, NewEggRecord};
use crate::repo::egg_record_repo::{EggRecordQuery, EggRecordRepository};
use crate::repo::RepoResult;

/// Use-case service wrapper for laying records.
pub struct EggRecordService<R: EggRecordRepository> {
    repo: R,
}

impl<R: EggRecordRepository> EggRecordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records `quantity` eggs laid by `chicken_id` on `date`.
    ///
    /// A second record for the same chicken and day is stored separately.
    pub fn record(
        &self,
        chicken_id: ChickenId,
        date: CalendarDate,
        quantity: u32,
    ) -> RepoResult<EggRecord> {
        self.repo.create_egg_record(&NewEggRecord {
            chicken_id,
            date,
            quantity,
        })
    }

    /// Lists records, optionally bounded by an inclusive date range.
    pub fn list(&self, query: &EggRecordQuery) -> RepoResult<Vec<EggRecord>> {
        self.repo.list_egg_records(query)
    }

    pub fn list_by_chicken(&self, chicken_id: ChickenId) -> RepoResult<Vec<EggRecord>> {
        self.repo.list_egg_records_by_chicken(chicken_id)
    }

    pub fn get(&self, id: EggRecordId) -> RepoResult<Option<EggRecord>> {
        self.repo.get_egg_record(id)
    }

    pub fn update(&self, id: EggRecordId, patch: &EggRecordPatch) -> RepoResult<EggRecord> {
        self.repo.update_egg_record(id, patch)
    }

    pub fn remove(&self, id: EggRecordId) -> RepoResult<bool> {
        self.repo.delete_egg_record(id)
    }
}
