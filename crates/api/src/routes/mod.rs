pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                              list (filter + paginate), create
/// /movies/{id}                         get, update, delete
/// /movies/{id}/ratings                 list, create
///
/// /directors                           list, create
/// /directors/{id}                      get
///
/// /genres                              list, create
/// /genres/{id}                         get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/directors", directors::router())
        .nest("/genres", genres::router())
}
