//! Movie entity model, list/detail views and DTOs.

use reelrate_core::types::{DbId, Timestamp};
use reelrate_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::director::Director;
use crate::models::genre::Genre;
use crate::models::rating::RatingStats;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director_id: DbId,
    pub release_year: i32,
    #[sqlx(rename = "cast_members")]
    pub cast: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat row returned by the catalog listing query: movie columns joined with
/// the director and the per-movie rating aggregate.
#[derive(Debug, Clone, FromRow)]
pub struct MovieListRow {
    pub id: DbId,
    pub title: String,
    pub release_year: i32,
    pub director_id: DbId,
    pub director_name: String,
    pub director_birth_year: Option<i32>,
    pub director_description: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
}

/// One entry of a catalog page.
#[derive(Debug, Clone, Serialize)]
pub struct MovieListItem {
    pub id: DbId,
    pub title: String,
    pub release_year: i32,
    pub director: Director,
    /// Genre names, alphabetical.
    pub genres: Vec<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
}

impl MovieListItem {
    pub fn from_row(row: MovieListRow, genres: Vec<String>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            release_year: row.release_year,
            director: Director {
                id: row.director_id,
                name: row.director_name,
                birth_year: row.director_birth_year,
                description: row.director_description,
            },
            genres,
            average_rating: row.average_rating,
            ratings_count: row.ratings_count,
        }
    }
}

/// Full movie view: director, genres and the rating aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub title: String,
    pub director: Director,
    pub release_year: i32,
    pub cast: Option<String>,
    pub genres: Vec<Genre>,
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MovieDetail {
    pub fn assemble(movie: Movie, director: Director, genres: Vec<Genre>, stats: RatingStats) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            director,
            release_year: movie.release_year,
            cast: movie.cast,
            genres,
            average_rating: stats.average_rating,
            ratings_count: stats.ratings_count,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

/// Normalised catalog filters. All present filters are combined with AND.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Exact release year.
    pub release_year: Option<i32>,
    /// Case-insensitive substring of any linked genre name.
    pub genre: Option<String>,
}

/// DTO for creating a movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub title: String,
    pub director_id: DbId,
    #[validate(range(min = 1888, max = 2100))]
    pub release_year: i32,
    pub cast: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<DbId>,
}

/// DTO for updating a movie. Absent fields are left unchanged; a present
/// `genre_ids` replaces the whole genre set.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub title: Option<String>,
    pub director_id: Option<DbId>,
    #[validate(range(min = 1888, max = 2100))]
    pub release_year: Option<i32>,
    pub cast: Option<String>,
    pub genre_ids: Option<Vec<DbId>>,
}
