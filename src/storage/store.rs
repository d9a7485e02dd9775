//! PlanStore - SQLite-backed storage for the planner.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use super::schema::SCHEMA_SQL;

/// SQLite-backed store for academic-planning data.
///
/// One `PlanStore` is opened per request and dropped when the request
/// completes, so the connection is released on every exit path.
pub struct PlanStore {
    pub(crate) conn: Connection,
}

impl PlanStore {
    /// Open the store file and enable foreign-key enforcement.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {:?}", path))?;
        conn.pragma_update(None, "foreign_keys", true)
            .context("Failed to enable foreign keys")?;
        Ok(Self { conn })
    }

    /// Create the store file from the embedded schema if it does not exist yet.
    pub fn bootstrap(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("Database already exists: {:?}", path);
            return Ok(());
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to create database: {:?}", path))?;
        conn.execute_batch(SCHEMA_SQL)
            .context("Failed to initialize schema")?;
        tracing::info!("Database initialized and schema created: {:?}", path);
        Ok(())
    }
}
