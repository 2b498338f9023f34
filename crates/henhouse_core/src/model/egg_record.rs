//! Egg record model: one dated laying observation for one chicken.
//!
//! Several records may share a `(chicken_id, date)` pair. They are kept
//! separate in storage and summed by the summary engine.

use crate::model::calendar_date::CalendarDate;
use crate::model::chicken::ChickenId;
use serde::{Deserialize, Serialize};

/// Store-assigned egg record identifier.
pub type EggRecordId = i64;

/// A persisted laying record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggRecord {
    pub id: EggRecordId,
    pub chicken_id: ChickenId,
    pub date: CalendarDate,
    pub quantity: u32,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Input for recording eggs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEggRecord {
    pub chicken_id: ChickenId,
    pub date: CalendarDate,
    pub quantity: u32,
}

/// Partial update for an egg record; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggRecordPatch {
    pub chicken_id: Option<ChickenId>,
    pub date: Option<CalendarDate>,
    pub quantity: Option<u32>,
}

impl EggRecordPatch {
    pub fn is_empty(&self) -> bool {
        self.chicken_id.is_none() && self.date.is_none() && self.quantity.is_none()
    }

    /// Applies the supplied fields onto `record`.
    pub fn apply_to(&self, record: &mut EggRecord) {
        if let Some(chicken_id) = self.chicken_id {
            record.chicken_id = chicken_id;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
    }
}
