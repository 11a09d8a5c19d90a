use axum::routing::get;
use axum::Router;

use crate::handlers::directors;
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(directors::list).post(directors::create))
        .route("/{id}", get(directors::get_by_id))
}
