//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values and need no
//! database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use reelrate_api::error::AppError;
use reelrate_core::error::CoreError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_uses_failure_envelope() {
    let (status, json) = error_to_response(AppError::not_found("Movie", 42)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        serde_json::json!({
            "status": "failure",
            "error": {
                "code": 404,
                "kind": "NOT_FOUND",
                "message": "Movie with id 42 not found",
            }
        })
    );
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("invalid field value".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "invalid field value");
}

#[tokio::test]
async fn conflict_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate name".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], 409);
    assert_eq!(json["error"]["kind"], "CONFLICT");
}

#[tokio::test]
async fn store_unavailable_hides_detail() {
    let err = AppError::Core(CoreError::StoreUnavailable(
        "connection refused (os error 111)".into(),
    ));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["kind"], "STORE_UNAVAILABLE");
    assert!(!json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("refused"));
}

#[tokio::test]
async fn pool_timeout_is_store_unavailable() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["kind"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn internal_error_is_sanitised() {
    let err = AppError::Core(CoreError::Internal("secret stack trace".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["kind"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "An internal error occurred");
}
