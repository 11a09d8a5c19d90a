use axum::extract::State;
use axum::{routing::get, Json, Router};
use reelrate_core::error::CoreError;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Liveness response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Readiness response payload.
#[derive(Serialize)]
pub struct DbHealthResponse {
    pub status: &'static str,
    pub db: &'static str,
}

/// GET /health -- liveness. Never touches the database.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health/db -- readiness. Runs `SELECT 1` through the pool.
async fn db_health_check(State(state): State<AppState>) -> AppResult<Json<DbHealthResponse>> {
    if let Err(e) = reelrate_db::health_check(&state.pool).await {
        tracing::warn!(error = %e, "Readiness probe failed");
        return Err(CoreError::StoreUnavailable(e.to_string()).into());
    }
    Ok(Json(DbHealthResponse {
        status: "ok",
        db: "reachable",
    }))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/db", get(db_health_check))
}
