//! Schema steps for the record store, tracked through `PRAGMA user_version`.
//!
//! Step `n` in [`SCHEMA_STEPS`] upgrades a database from version `n` to
//! `n + 1`. A fresh database is version 0.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;
use std::time::Instant;

const SCHEMA_STEPS: &[&str] = &[include_str!("0001_init.sql")];

/// Schema version a fully migrated database reports.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Reads the schema version of `conn`.
///
/// Fails with [`DbError::UnsupportedSchemaVersion`] when the database was
/// written by a newer build than this one.
pub fn checked_schema_version(conn: &Connection) -> DbResult<u32> {
    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest_supported = latest_version();

    if db_version > latest_supported {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        });
    }
    Ok(db_version)
}

/// Brings `conn` up to [`latest_version`] in one transaction.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version = checked_schema_version(conn)?;
    let to_version = latest_version();
    if from_version == to_version {
        return Ok(());
    }

    let started_at = Instant::now();
    let tx = conn.transaction()?;
    for (version, sql) in (1u32..).zip(SCHEMA_STEPS).skip(from_version as usize) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={} duration_ms={}",
        from_version,
        to_version,
        started_at.elapsed().as_millis()
    );
    Ok(())
}
