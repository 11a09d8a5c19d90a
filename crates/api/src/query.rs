//! Query parameter types for API handlers.

use serde::Deserialize;

/// Catalog listing parameters
/// (`?page=&page_size=&title=&release_year=&genre=`).
///
/// Values are resolved and validated by the movie service.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Case-insensitive partial match on the title.
    pub title: Option<String>,
    /// Exact release year.
    pub release_year: Option<i32>,
    /// Case-insensitive partial match on any genre name.
    pub genre: Option<String>,
}
