//! Repository for the `movie_ratings` table.

use reelrate_core::types::DbId;
use sqlx::{Executor, PgPool, Postgres};

use crate::models::rating::{Rating, RatingStats};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, score, created_at";

/// Provides insert and aggregate operations for ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert one rating. The score range is also enforced by
    /// `ck_movie_ratings_score_1_10`.
    pub async fn create(pool: &PgPool, movie_id: DbId, score: i32) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_ratings (movie_id, score)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(movie_id)
            .bind(score)
            .fetch_one(pool)
            .await
    }

    /// Average score and count for a movie, computed from the rating rows.
    ///
    /// `average_rating` is `None` when there are no ratings.
    pub async fn stats_for_movie<'e, E>(executor: E, movie_id: DbId) -> Result<RatingStats, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, RatingStats>(
            "SELECT AVG(score)::FLOAT8 AS average_rating, COUNT(*) AS ratings_count \
             FROM movie_ratings \
             WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_one(executor)
        .await
    }

    /// List a movie's ratings, oldest first.
    pub async fn list_for_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie_ratings WHERE movie_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }
}
