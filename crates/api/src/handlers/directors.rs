//! Handlers for the `/directors` reference resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reelrate_core::types::DbId;
use reelrate_core::validation::validate_request;
use reelrate_db::models::director::{CreateDirector, Director};
use reelrate_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/directors
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDirector>,
) -> AppResult<(StatusCode, Json<DataResponse<Director>>)> {
    validate_request(&input)?;
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(director))))
}

/// GET /api/v1/directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Director>>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(directors)))
}

/// GET /api/v1/directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Director>>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Director", id))?;
    Ok(Json(DataResponse::new(director)))
}
