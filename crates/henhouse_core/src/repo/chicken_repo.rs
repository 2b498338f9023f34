//! Chicken repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Register, list, patch and delete chickens.
//!
//! # Invariants
//! - Write paths validate display fields before SQL mutations.
//! - Name and breed are stored without surrounding whitespace.
//! - Deleting a chicken removes its egg records in the same transaction.

use crate::model::chicken::{Chicken, ChickenId, ChickenPatch, NewChicken};
use crate::repo::{ensure_connection_ready, query_first, query_rows, RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, Row};

const CHICKEN_COLUMNS: &str = "id, name, breed, created_at";

/// Repository interface for chicken CRUD operations.
pub trait ChickenRepository {
    fn create_chicken(&self, input: &NewChicken) -> RepoResult<Chicken>;
    /// Lists all chickens ordered by id.
    fn list_chickens(&self) -> RepoResult<Vec<Chicken>>;
    fn get_chicken(&self, id: ChickenId) -> RepoResult<Option<Chicken>>;
    /// Applies `patch`; an empty patch returns the stored chicken.
    fn update_chicken(&self, id: ChickenId, patch: &ChickenPatch) -> RepoResult<Chicken>;
    /// Returns `false` when no chicken had this id.
    fn delete_chicken(&self, id: ChickenId) -> RepoResult<bool>;
}

/// SQLite-backed chicken repository.
pub struct SqliteChickenRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteChickenRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ChickenRepository for SqliteChickenRepository<'_> {
    fn create_chicken(&self, input: &NewChicken) -> RepoResult<Chicken> {
        input.validate()?;

        let chicken = query_first(
            self.conn,
            &format!("INSERT INTO chickens (name, breed) VALUES (?1, ?2) RETURNING {CHICKEN_COLUMNS};"),
            params![input.name.trim(), input.breed.trim()],
            parse_chicken_row,
        )?
        .ok_or_else(|| RepoError::InvalidData("insert returned no chicken row".to_string()))?;

        info!(
            "event=chicken_create module=repo status=ok chicken_id={}",
            chicken.id
        );
        Ok(chicken)
    }

    fn list_chickens(&self) -> RepoResult<Vec<Chicken>> {
        query_rows(
            self.conn,
            &format!("SELECT {CHICKEN_COLUMNS} FROM chickens ORDER BY id ASC;"),
            [],
            parse_chicken_row,
        )
    }

    fn get_chicken(&self, id: ChickenId) -> RepoResult<Option<Chicken>> {
        query_first(
            self.conn,
            &format!("SELECT {CHICKEN_COLUMNS} FROM chickens WHERE id = ?1;"),
            [id],
            parse_chicken_row,
        )
    }

    fn update_chicken(&self, id: ChickenId, patch: &ChickenPatch) -> RepoResult<Chicken> {
        patch.validate()?;

        if patch.is_empty() {
            return self.get_chicken(id)?.ok_or(RepoError::ChickenNotFound(id));
        }

        let chicken = query_first(
            self.conn,
            &format!(
                "UPDATE chickens
                 SET
                    name = COALESCE(?2, name),
                    breed = COALESCE(?3, breed)
                 WHERE id = ?1
                 RETURNING {CHICKEN_COLUMNS};"
            ),
            params![
                id,
                patch.name.as_deref().map(str::trim),
                patch.breed.as_deref().map(str::trim)
            ],
            parse_chicken_row,
        )?
        .ok_or(RepoError::ChickenNotFound(id))?;

        info!("event=chicken_update module=repo status=ok chicken_id={id}");
        Ok(chicken)
    }

    fn delete_chicken(&self, id: ChickenId) -> RepoResult<bool> {
        let tx = self.conn.unchecked_transaction()?;
        let removed_records = tx.execute("DELETE FROM egg_records WHERE chicken_id = ?1;", [id])?;
        let removed = tx.execute("DELETE FROM chickens WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=chicken_delete module=repo status=ok chicken_id={} found={} egg_records_removed={}",
            id,
            removed > 0,
            removed_records
        );
        Ok(removed > 0)
    }
}

/// Returns whether a chicken with `id` is currently registered.
pub(crate) fn chicken_exists(conn: &Connection, id: ChickenId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM chickens WHERE id = ?1);",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn parse_chicken_row(row: &Row<'_>) -> RepoResult<Chicken> {
    Ok(Chicken {
        id: row.get("id")?,
        name: row.get("name")?,
        breed: row.get("breed")?,
        created_at: row.get("created_at")?,
    })
}
