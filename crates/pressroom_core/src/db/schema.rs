//! Schema creation for the archive tables.
//!
//! # Responsibility
//! - Create the `authors`, `magazines`, and `articles` tables.
//! - Stay a no-op when the tables already exist.
//!
//! # Invariants
//! - Re-running `create_schema` never errors and never touches existing rows.
//! - `articles` carries the two required foreign keys; whether they are
//!   enforced depends on the connection (see `enable_foreign_keys`).

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the three archive tables if they are missing.
pub fn create_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Turns on foreign-key enforcement for this connection only.
///
/// SQLite leaves the pragma off by default, so a dangling `author_id` or
/// `magazine_id` is accepted unless a caller opts in here first.
pub fn enable_foreign_keys(conn: &Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(())
}
