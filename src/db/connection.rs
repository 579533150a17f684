use std::path::Path;

use rusqlite::Connection;

use crate::db::schema::CREATE_SCHEMA;
use crate::error::Result;

/// Owner of the single store connection for a run.
///
/// The connection closes when the value is dropped, on success and error paths alike.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path. No schema is applied.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA foreign_keys=ON;\
             PRAGMA synchronous=NORMAL;\
             PRAGMA temp_store=MEMORY;",
        )?;
        Ok(Self { conn })
    }

    /// Create an in-memory database with the built-in schema (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(CREATE_SCHEMA)?;
        Ok(Self { conn })
    }

    /// Apply the built-in `language`/`corpora`/`words_or_parts` schema.
    pub fn apply_builtin_schema(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_SCHEMA)?;
        Ok(())
    }

    /// Start a write batch.
    pub fn begin(&self) -> Result<()> {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        Ok(())
    }

    /// Commit the open batch, if any.
    pub fn commit(&self) -> Result<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
        }
        Ok(())
    }

    /// Discard the open batch, if any.
    pub fn rollback(&self) -> Result<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("ROLLBACK")?;
        }
        Ok(())
    }

    /// Access the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
