//! Connection pool, embedded migrations and seed data for the roster store

use std::path::Path;
use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, SqlitePool};
use thiserror::Error;

use crate::config::DatabaseConfig;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),

    #[error("failed to read seed file {path}: {source}")]
    ReadSeed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to apply seed file {path}: {source}")]
    Seed {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Opens a pool against the configured store, creating the file if needed
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let connect_err = |source: sqlx::Error| DatabaseError::Connect {
        url: config.url.clone(),
        source,
    };

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(connect_err)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(connect_err)
}

/// Applies the embedded migrations
pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Executes every `.sql` file in `dir`, in file-name order
///
/// All files run in one transaction: a failing file leaves the roster as it
/// was. Skipped entirely when the roster already has rows, so restarting a
/// seeded deployment never duplicates teammates. Returns the number of
/// files applied.
pub async fn seed(pool: &SqlitePool, dir: &Path) -> Result<usize, DatabaseError> {
    let read_err = |source: std::io::Error| DatabaseError::ReadSeed {
        path: dir.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let mut tx = pool.begin().await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM roster")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "Roster already populated, skipping seeds");
        return Ok(0);
    }

    for path in &files {
        let sql = std::fs::read_to_string(path).map_err(|source| DatabaseError::ReadSeed {
            path: path.display().to_string(),
            source,
        })?;

        (&mut *tx)
            .execute(sql.as_str())
            .await
            .map_err(|source| DatabaseError::Seed {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(file = %path.display(), "Applied seed file");
    }

    tx.commit().await?;
    Ok(files.len())
}
