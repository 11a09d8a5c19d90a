//! Movie rating model and DTOs.

use reelrate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_ratings` table. Ratings are never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    #[serde(rename = "rating_id")]
    pub id: DbId,
    pub movie_id: DbId,
    pub score: i32,
    pub created_at: Timestamp,
}

/// DTO for rating a movie. The score range is checked by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRating {
    pub score: i32,
}

/// Aggregate over all ratings of one movie, computed on read.
#[derive(Debug, Clone, Copy, PartialEq, FromRow, Serialize)]
pub struct RatingStats {
    /// `None` when the movie has no ratings.
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
}
