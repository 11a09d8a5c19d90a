//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reelrate_core::pagination::Page;
use reelrate_core::types::DbId;
use reelrate_db::models::movie::{CreateMovie, MovieDetail, MovieListItem, UpdateMovie};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::MovieListParams;
use crate::response::DataResponse;
use crate::services::MovieService;
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MovieListParams>,
) -> AppResult<Json<DataResponse<Page<MovieListItem>>>> {
    let page = MovieService::list(&state.pool, &params, &state.config.pagination).await?;
    Ok(Json(DataResponse::new(page)))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<MovieDetail>>> {
    let movie = MovieService::get(&state.pool, id).await?;
    Ok(Json(DataResponse::new(movie)))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<DataResponse<MovieDetail>>)> {
    let movie = MovieService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(movie))))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<DataResponse<MovieDetail>>> {
    let movie = MovieService::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse::new(movie)))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    MovieService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
