//! Route definitions for the `/movies` resource and its ratings.

use axum::routing::get;
use axum::Router;

use crate::handlers::{movies, ratings};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
///
/// GET    /{id}/ratings    -> ratings::list
/// POST   /{id}/ratings    -> ratings::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
        .route("/{id}/ratings", get(ratings::list).post(ratings::create))
}
