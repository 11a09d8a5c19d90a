//! Repository for the `genres` table and genre lookups through `movie_genres`.

use reelrate_core::types::DbId;
use sqlx::{Executor, PgPool, Postgres, Transaction};

use crate::models::genre::{CreateGenre, Genre, MovieGenreRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description";

/// Provides read/create operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre. A duplicate name violates `uq_genres_name`.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(input.name.trim())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name, id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Genres linked to one movie, alphabetical.
    pub async fn list_for_movie<'e, E>(executor: E, movie_id: DbId) -> Result<Vec<Genre>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.name, g.description \
             FROM movie_genres mg \
             JOIN genres g ON g.id = mg.genre_id \
             WHERE mg.movie_id = $1 \
             ORDER BY g.name, g.id",
        )
        .bind(movie_id)
        .fetch_all(executor)
        .await
    }

    /// Genres linked to any of `movie_ids`, grouped by movie and alphabetical
    /// within each movie.
    pub async fn list_for_movies(
        pool: &PgPool,
        movie_ids: &[DbId],
    ) -> Result<Vec<MovieGenreRow>, sqlx::Error> {
        if movie_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, MovieGenreRow>(
            "SELECT mg.movie_id, g.id, g.name, g.description \
             FROM movie_genres mg \
             JOIN genres g ON g.id = mg.genre_id \
             WHERE mg.movie_id = ANY($1) \
             ORDER BY mg.movie_id, g.name, g.id",
        )
        .bind(movie_ids)
        .fetch_all(pool)
        .await
    }

    /// Return which of `ids` exist, share-locking them for the rest of the
    /// transaction.
    pub async fn existing_ids_for_share(
        tx: &mut Transaction<'_, Postgres>,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM genres WHERE id = ANY($1) ORDER BY id FOR SHARE",
        )
        .bind(ids)
        .fetch_all(&mut **tx)
        .await
    }
}
