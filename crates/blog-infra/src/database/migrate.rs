//! Sequential SQL-file migration runner.
//!
//! Deliberately not a migration engine: files under the migrations directory
//! are applied in lexical filename order, every run. Schema files are
//! expected to be idempotent (`CREATE TABLE IF NOT EXISTS` and friends).

use std::path::{Path, PathBuf};

use sea_orm::{ConnectionTrait, DbConn, DbErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("failed to read migrations: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to apply migration: {0}")]
    Db(#[from] DbErr),
}

/// Apply every `.sql` file under `dir`, sorted by filename.
pub async fn run_migrations(db: &DbConn, dir: &Path) -> Result<(), MigrateError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "sql"))
        .collect();
    files.sort();

    for file in &files {
        let sql = std::fs::read_to_string(file)?;
        tracing::info!(file = %file.display(), "applying migration");
        db.execute_unprepared(&sql).await?;
    }

    tracing::info!(count = files.len(), "migrations applied");
    Ok(())
}
