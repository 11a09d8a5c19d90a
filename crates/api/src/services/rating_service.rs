//! Rating sub-resource rules.

use reelrate_core::catalog::validate_score;
use reelrate_core::types::DbId;
use reelrate_db::models::rating::{CreateRating, Rating};
use reelrate_db::repositories::{MovieRepo, RatingRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Stateless service over [`RatingRepo`].
pub struct RatingService;

impl RatingService {
    /// Record one rating for a movie.
    ///
    /// The score is checked before the database is touched. No aggregate is
    /// stored; averages are computed on read.
    pub async fn create(pool: &PgPool, movie_id: DbId, input: &CreateRating) -> AppResult<Rating> {
        validate_score(input.score)?;

        if !MovieRepo::exists(pool, movie_id).await? {
            return Err(AppError::not_found("Movie", movie_id));
        }

        let rating = RatingRepo::create(pool, movie_id, input.score).await?;
        tracing::info!(
            movie_id,
            rating_id = rating.id,
            score = rating.score,
            "Rating recorded",
        );
        Ok(rating)
    }

    /// All ratings of a movie, oldest first.
    pub async fn list(pool: &PgPool, movie_id: DbId) -> AppResult<Vec<Rating>> {
        if !MovieRepo::exists(pool, movie_id).await? {
            return Err(AppError::not_found("Movie", movie_id));
        }
        Ok(RatingRepo::list_for_movie(pool, movie_id).await?)
    }
}
