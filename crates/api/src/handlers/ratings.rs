//! Handlers for the `/movies/{id}/ratings` sub-resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reelrate_core::types::DbId;
use reelrate_db::models::rating::{CreateRating, Rating};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::services::RatingService;
use crate::state::AppState;

/// POST /api/v1/movies/{id}/ratings
pub async fn create(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateRating>,
) -> AppResult<(StatusCode, Json<DataResponse<Rating>>)> {
    let rating = RatingService::create(&state.pool, movie_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(rating))))
}

/// GET /api/v1/movies/{id}/ratings
pub async fn list(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Rating>>>> {
    let ratings = RatingService::list(&state.pool, movie_id).await?;
    Ok(Json(DataResponse::new(ratings)))
}
