//! Repository for the `directors` table.

use reelrate_core::types::DbId;
use sqlx::{Executor, PgPool, Postgres, Transaction};

use crate::models::director::{CreateDirector, Director};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birth_year, description";

/// Provides read/create operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (name, birth_year, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(input.name.trim())
            .bind(input.birth_year)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a director by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Director>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all directors ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY name, id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Check that a director exists, holding a share lock on the row until
    /// the transaction ends so it cannot be deleted underneath a movie write.
    pub async fn exists_for_share(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, DbId>("SELECT id FROM directors WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(found.is_some())
    }
}
