//! Chicken use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Service layer remains storage-agnostic.

use crate::model::chicken::{Chicken, ChickenId, ChickenPatch, NewChicken};
use crate::repo::chicken_repo::ChickenRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for chicken registration.
pub struct ChickenService<R: ChickenRepository> {
    repo: R,
}

impl<R: ChickenRepository> ChickenService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a chicken from its display fields.
    pub fn register(
        &self,
        name: impl Into<String>,
        breed: impl Into<String>,
    ) -> RepoResult<Chicken> {
        self.repo.create_chicken(&NewChicken::new(name, breed))
    }

    pub fn list(&self) -> RepoResult<Vec<Chicken>> {
        self.repo.list_chickens()
    }

    pub fn get(&self, id: ChickenId) -> RepoResult<Option<Chicken>> {
        self.repo.get_chicken(id)
    }

    /// Applies a partial update. Returns `ChickenNotFound` for unknown ids.
    pub fn update(&self, id: ChickenId, patch: &ChickenPatch) -> RepoResult<Chicken> {
        self.repo.update_chicken(id, patch)
    }

    /// Removes a chicken and all of its egg records.
    pub fn remove(&self, id: ChickenId) -> RepoResult<bool> {
        self.repo.delete_chicken(id)
    }
}
