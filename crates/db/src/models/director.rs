//! Director entity model and DTOs.

use reelrate_core::types::DbId;
use reelrate_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `directors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}

/// DTO for creating a director.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDirector {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[validate(range(min = 1800, max = 2100))]
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}
