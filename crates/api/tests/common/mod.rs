#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use reelrate_core::pagination::PageLimits;
use sqlx::PgPool;
use tower::ServiceExt;

use reelrate_api::config::{DatabaseConfig, LogFormat, ServerConfig};
use reelrate_api::router::build_app_router;
use reelrate_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        pagination: PageLimits::default(),
        log_format: LogFormat::Pretty,
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 1,
            run_migrations: false,
        },
    }
}

/// Build the full application router around the given pool, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn json_request(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a failure envelope with the given status and kind; returns the
/// error message.
pub async fn expect_failure(response: Response, status: StatusCode, kind: &str) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["status"], "failure");
    assert_eq!(json["error"]["code"], status.as_u16());
    assert_eq!(json["error"]["kind"], kind);
    json["error"]["message"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_director(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/directors",
        serde_json::json!({"name": name}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_genre(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/genres",
        serde_json::json!({"name": name}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_movie(
    pool: &PgPool,
    title: &str,
    director_id: i64,
    release_year: i32,
    genre_ids: &[i64],
) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/movies",
        serde_json::json!({
            "title": title,
            "director_id": director_id,
            "release_year": release_year,
            "genre_ids": genre_ids,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn rate(pool: &PgPool, movie_id: i64, score: i64) -> Response {
    post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/movies/{movie_id}/ratings"),
        serde_json::json!({"score": score}),
    )
    .await
}
