//! SQLite schema migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing version order.
//! - Apply pending migrations atomically.
//!
//! # Invariants
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - Re-running against an already-migrated file is a no-op; existing rows
//!   are never touched.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// (version, sql) pairs; versions must stay monotonic.
const SCHEMA: &[(u32, &str)] = &[(1, include_str!("0001_tasks.sql"))];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA.last().map_or(0, |(version, _)| *version)
}

/// Applies all pending migrations on the provided connection.
///
/// Fails without touching the database when its `user_version` is newer
/// than this binary supports.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = current_user_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in SCHEMA.iter().filter(|(version, _)| *version > current) {
        tx.execute_batch(sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
