//! Chicken (flock member) model.
//!
//! # Responsibility
//! - Define the persisted chicken row and its create/patch inputs.
//! - Validate display fields before they reach storage.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - `name` and `breed` are never blank and are stored trimmed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned chicken identifier.
pub type ChickenId = i64;

/// Validation failures for chicken display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChickenValidationError {
    EmptyName,
    EmptyBreed,
}

impl Display for ChickenValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "chicken name is required"),
            Self::EmptyBreed => write!(f, "chicken breed is required"),
        }
    }
}

impl Error for ChickenValidationError {}

/// A registered chicken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chicken {
    pub id: ChickenId,
    pub name: String,
    pub breed: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Input for registering a chicken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChicken {
    pub name: String,
    pub breed: String,
}

impl NewChicken {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ChickenValidationError> {
        validate_name(&self.name)?;
        validate_breed(&self.breed)
    }
}

/// Partial update for a chicken; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChickenPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
}

impl ChickenPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none()
    }

    pub fn validate(&self) -> Result<(), ChickenValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(breed) = &self.breed {
            validate_breed(breed)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ChickenValidationError> {
    if name.trim().is_empty() {
        return Err(ChickenValidationError::EmptyName);
    }
    Ok(())
}

fn validate_breed(breed: &str) -> Result<(), ChickenValidationError> {
    if breed.trim().is_empty() {
        return Err(ChickenValidationError::EmptyBreed);
    }
    Ok(())
}
