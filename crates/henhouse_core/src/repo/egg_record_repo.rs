//! Egg record repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Record, list, patch and delete laying records.
//! - Serve date and date-range reads to the summary engine.
//!
//! # Invariants
//! - Records are never merged at write time, even for a repeated
//!   `(chicken_id, date)` pair.
//! - Every write re-checks that the referenced chicken exists.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::model::calendar_date::CalendarDate;
use crate::model::chicken::ChickenId;
use crate::model::egg_record::{EggRecord, EggRecordId, EggRecordPatch, NewEggRecord};
use crate::repo::chicken_repo::chicken_exists;
use crate::repo::{ensure_connection_ready, query_first, query_rows, RepoError, RepoResult};
use crate::summary::EggRecordSource;
use log::info;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const EGG_RECORD_SELECT_SQL: &str = "SELECT
    id,
    chicken_id,
    date,
    quantity,
    created_at
FROM egg_records";

/// Date filter for listing egg records. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EggRecordQuery {
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
}

impl EggRecordQuery {
    /// Matches records on exactly `date`.
    pub fn on(date: CalendarDate) -> Self {
        Self::between(date, date)
    }

    /// Matches records in `[start, end]`.
    pub fn between(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
        }
    }
}

/// Repository interface for egg record CRUD operations.
pub trait EggRecordRepository {
    /// Fails with `ChickenNotFound` when `input.chicken_id` is unknown.
    fn create_egg_record(&self, input: &NewEggRecord) -> RepoResult<EggRecord>;
    /// Lists records ordered by `date DESC, id ASC`.
    fn list_egg_records(&self, query: &EggRecordQuery) -> RepoResult<Vec<EggRecord>>;
    fn list_egg_records_by_chicken(&self, chicken_id: ChickenId) -> RepoResult<Vec<EggRecord>>;
    fn get_egg_record(&self, id: EggRecordId) -> RepoResult<Option<EggRecord>>;
    /// Applies `patch`; an empty patch returns the stored record.
    fn update_egg_record(&self, id: EggRecordId, patch: &EggRecordPatch)
        -> RepoResult<EggRecord>;
    /// Returns `false` when no record had this id.
    fn delete_egg_record(&self, id: EggRecordId) -> RepoResult<bool>;
}

/// SQLite-backed egg record repository.
pub struct SqliteEggRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEggRecordRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn ensure_chicken_exists(&self, chicken_id: ChickenId) -> RepoResult<()> {
        if chicken_exists(self.conn, chicken_id)? {
            Ok(())
        } else {
            Err(RepoError::ChickenNotFound(chicken_id))
        }
    }
}

impl EggRecordRepository for SqliteEggRecordRepository<'_> {
    fn create_egg_record(&self, input: &NewEggRecord) -> RepoResult<EggRecord> {
        self.ensure_chicken_exists(input.chicken_id)?;

        let record = query_first(
            self.conn,
            "INSERT INTO egg_records (chicken_id, date, quantity)
             VALUES (?1, ?2, ?3)
             RETURNING id, chicken_id, date, quantity, created_at;",
            params![input.chicken_id, input.date, input.quantity],
            parse_egg_record_row,
        )?
        .ok_or_else(|| RepoError::InvalidData("insert returned no egg record row".to_string()))?;

        info!(
            "event=egg_record_create module=repo status=ok egg_record_id={} chicken_id={} date={}",
            record.id, record.chicken_id, record.date
        );
        Ok(record)
    }

    fn list_egg_records(&self, query: &EggRecordQuery) -> RepoResult<Vec<EggRecord>> {
        let mut sql = format!("{EGG_RECORD_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(start) = query.start_date {
            sql.push_str(" AND date >= ?");
            bind_values.push(Value::Text(start.to_string()));
        }
        if let Some(end) = query.end_date {
            sql.push_str(" AND date <= ?");
            bind_values.push(Value::Text(end.to_string()));
        }

        sql.push_str(" ORDER BY date DESC, id ASC;");

        query_rows(
            self.conn,
            &sql,
            params_from_iter(bind_values),
            parse_egg_record_row,
        )
    }

    fn list_egg_records_by_chicken(&self, chicken_id: ChickenId) -> RepoResult<Vec<EggRecord>> {
        query_rows(
            self.conn,
            &format!(
                "{EGG_RECORD_SELECT_SQL}
                 WHERE chicken_id = ?1
                 ORDER BY date DESC, id ASC;"
            ),
            [chicken_id],
            parse_egg_record_row,
        )
    }

    fn get_egg_record(&self, id: EggRecordId) -> RepoResult<Option<EggRecord>> {
        query_first(
            self.conn,
            &format!("{EGG_RECORD_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_egg_record_row,
        )
    }

    fn update_egg_record(
        &self,
        id: EggRecordId,
        patch: &EggRecordPatch,
    ) -> RepoResult<EggRecord> {
        let mut record = self
            .get_egg_record(id)?
            .ok_or(RepoError::EggRecordNotFound(id))?;

        if patch.is_empty() {
            return Ok(record);
        }
        if let Some(chicken_id) = patch.chicken_id {
            self.ensure_chicken_exists(chicken_id)?;
        }

        patch.apply_to(&mut record);
        let changed = self.conn.execute(
            "UPDATE egg_records
             SET
                chicken_id = ?2,
                date = ?3,
                quantity = ?4
             WHERE id = ?1;",
            params![id, record.chicken_id, record.date, record.quantity],
        )?;

        if changed == 0 {
            return Err(RepoError::EggRecordNotFound(id));
        }

        info!(
            "event=egg_record_update module=repo status=ok egg_record_id={} chicken_id={} date={}",
            id, record.chicken_id, record.date
        );
        Ok(record)
    }

    fn delete_egg_record(&self, id: EggRecordId) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM egg_records WHERE id = ?1;", [id])?;

        info!(
            "event=egg_record_delete module=repo status=ok egg_record_id={} found={}",
            id,
            removed > 0
        );
        Ok(removed > 0)
    }
}

impl EggRecordSource for SqliteEggRecordRepository<'_> {
    fn fetch_by_date(&self, date: CalendarDate) -> RepoResult<Vec<EggRecord>> {
        self.list_egg_records(&EggRecordQuery::on(date))
    }

    fn fetch_by_date_range(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> RepoResult<Vec<EggRecord>> {
        self.list_egg_records(&EggRecordQuery::between(start, end))
    }
}

fn parse_egg_record_row(row: &Row<'_>) -> RepoResult<EggRecord> {
    let date_text: String = row.get("date")?;
    let date = CalendarDate::parse(&date_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid date `{date_text}` in egg_records.date"))
    })?;

    let raw_quantity: i64 = row.get("quantity")?;
    let quantity = u32::try_from(raw_quantity).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid quantity `{raw_quantity}` in egg_records.quantity"
        ))
    })?;

    Ok(EggRecord {
        id: row.get("id")?,
        chicken_id: row.get("chicken_id")?,
        date,
        quantity,
        created_at: row.get("created_at")?,
    })
}
