//! Record store: repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define CRUD contracts for chickens and egg records.
//! - Keep SQL details inside the persistence boundary.
//! - Serve the read contract the summary engine consumes.
//!
//! # Invariants
//! - Repositories only operate on fully migrated connections.
//! - Egg record writes reference an existing chicken.
//! - APIs return semantic not-found errors in addition to DB errors.

use crate::db::migrations::{checked_schema_version, latest_version};
use crate::db::DbError;
use crate::model::chicken::{ChickenId, ChickenValidationError};
use crate::model::egg_record::EggRecordId;
use rusqlite::{Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod chicken_repo;
pub mod egg_record_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record store writes and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(ChickenValidationError),
    Db(DbError),
    ChickenNotFound(ChickenId),
    EggRecordNotFound(EggRecordId),
    /// Connection schema is older than this binary expects.
    SchemaNotReady {
        db_version: u32,
        expected: u32,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::ChickenNotFound(id) => write!(f, "chicken not found: {id}"),
            Self::EggRecordNotFound(id) => write!(f, "egg record not found: {id}"),
            Self::SchemaNotReady {
                db_version,
                expected,
            } => write!(
                f,
                "database schema version {db_version} is not migrated to {expected}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::ChickenNotFound(_)
            | Self::EggRecordNotFound(_)
            | Self::SchemaNotReady { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<ChickenValidationError> for RepoError {
    fn from(value: ChickenValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Rejects connections whose schema is not exactly at the latest migration.
pub(crate) fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let db_version = checked_schema_version(conn)?;
    let expected = latest_version();

    if db_version < expected {
        return Err(RepoError::SchemaNotReady {
            db_version,
            expected,
        });
    }
    Ok(())
}

pub(crate) fn query_rows<T, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    parse: fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut items = Vec::new();

    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }

    Ok(items)
}

pub(crate) fn query_first<T, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    parse: fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Option<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;

    match rows.next()? {
        Some(row) => Ok(Some(parse(row)?)),
        None => Ok(None),
    }
}
