use std::path::Path;

use tracing::info;

use crate::db::Database;
use crate::error::Result;

/// Run every statement of a schema script against the store, in order.
pub fn run_script_file(db: &Database, path: &Path) -> Result<()> {
    let sql = std::fs::read_to_string(path)?;
    info!(script = %path.display(), "running schema script");
    run_script(db, &sql)
}

/// Run a batch of `;`-separated statements.
pub fn run_script(db: &Database, sql: &str) -> Result<()> {
    db.conn().execute_batch(sql)?;
    Ok(())
}
