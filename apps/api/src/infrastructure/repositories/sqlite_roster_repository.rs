use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::{FromRow, SqlitePool};

use crate::domain::errors::RepositoryError;
use crate::domain::repositories::RosterRepository;
use crate::domain::teammate::{NewTeammate, Teammate, TeammateChanges, TeammateId};

/// SQLite implementation of RosterRepository
///
/// Owns all access to the `roster` table. Writes are followed by a re-read
/// by ID so callers always get the row exactly as stored.
pub struct SqliteRosterRepository {
    pool: SqlitePool,
}

impl SqliteRosterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TeammateRow {
    id: i64,
    name: String,
    jersey: Option<i64>,
}

impl TeammateRow {
    fn into_teammate(self) -> Result<Teammate, RepositoryError> {
        let id = TeammateId::new(self.id).ok_or(RepositoryError::Missing(self.id))?;
        Ok(Teammate::from_persistence(id, self.name, self.jersey))
    }
}

fn into_teammates(rows: Vec<TeammateRow>) -> Result<Vec<Teammate>, RepositoryError> {
    rows.into_iter().map(TeammateRow::into_teammate).collect()
}

/// Splits constraint violations from other driver failures
///
/// The driver's constraint text names tables and columns, so it is only
/// logged.
fn classify(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(
            db_err.kind(),
            ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
        ) {
            tracing::warn!(detail = db_err.message(), "Roster write violated a constraint");
            return RepositoryError::Constraint;
        }
    }
    RepositoryError::Database(err)
}

#[async_trait]
impl RosterRepository for SqliteRosterRepository {
    async fn list_all(&self) -> Result<Vec<Teammate>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeammateRow>(
            r#"
            SELECT id, name, jersey
            FROM roster
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Fetched full roster");
        into_teammates(rows)
    }

    async fn find_by_id(&self, id: TeammateId) -> Result<Option<Teammate>, RepositoryError> {
        let row = sqlx::query_as::<_, TeammateRow>(
            r#"
            SELECT id, name, jersey
            FROM roster
            WHERE id = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TeammateRow::into_teammate).transpose()
    }

    async fn find_by_jersey(&self, jersey: i64) -> Result<Vec<Teammate>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeammateRow>(
            r#"
            SELECT id, name, jersey
            FROM roster
            WHERE jersey = ?
            ORDER BY id
            "#,
        )
        .bind(jersey)
        .fetch_all(&self.pool)
        .await?;

        into_teammates(rows)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Teammate>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeammateRow>(
            r#"
            SELECT id, name, jersey
            FROM roster
            WHERE name = ?
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        into_teammates(rows)
    }

    async fn create(&self, teammate: &NewTeammate) -> Result<Teammate, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO roster (name, jersey)
            VALUES (?, ?)
            "#,
        )
        .bind(teammate.name())
        .bind(teammate.jersey())
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        let raw_id = result.last_insert_rowid();
        tracing::debug!(id = raw_id, "Inserted teammate");

        let id = TeammateId::new(raw_id).ok_or(RepositoryError::Missing(raw_id))?;
        self.find_by_id(id)
            .await?
            .ok_or(RepositoryError::Missing(raw_id))
    }

    async fn update(
        &self,
        id: TeammateId,
        changes: &TeammateChanges,
    ) -> Result<Option<Teammate>, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE roster
            SET name = COALESCE(?, name),
                jersey = CASE WHEN ? THEN ? ELSE jersey END
            WHERE id = ?
            "#,
        )
        .bind(changes.name())
        .bind(changes.jersey().is_some())
        .bind(changes.jersey().flatten())
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        if result.rows_affected() == 0 {
            tracing::debug!(id = %id, "Update matched no teammate");
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn remove(&self, id: TeammateId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM roster WHERE id = ?
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
