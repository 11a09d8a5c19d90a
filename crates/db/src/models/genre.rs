//! Genre entity model and DTOs.

use reelrate_core::types::DbId;
use reelrate_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genres` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a genre. Names are unique.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,
    pub description: Option<String>,
}

/// A genre row tagged with the movie it is linked to. Used to batch-load
/// genres for a page of movies.
#[derive(Debug, Clone, FromRow)]
pub struct MovieGenreRow {
    pub movie_id: DbId,
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

impl From<MovieGenreRow> for Genre {
    fn from(row: MovieGenreRow) -> Self {
        Genre {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
