//! Handlers for the `/genres` reference resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reelrate_core::types::DbId;
use reelrate_core::validation::validate_request;
use reelrate_db::models::genre::{CreateGenre, Genre};
use reelrate_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/genres
///
/// A duplicate name is rejected by `uq_genres_name` and answered with 409.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateGenre>,
) -> AppResult<(StatusCode, Json<DataResponse<Genre>>)> {
    validate_request(&input)?;
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(genre))))
}

/// GET /api/v1/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Genre>>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(genres)))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Genre>>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Genre", id))?;
    Ok(Json(DataResponse::new(genre)))
}
