//! HTTP-level integration tests for the ratings sub-resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_director, create_movie, expect_failure, get, rate};
use sqlx::PgPool;

async fn rating_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM movie_ratings")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn seed_movie(pool: &PgPool) -> i64 {
    let director = create_director(pool, "Jane Campion").await;
    create_movie(pool, "The Piano", director, 1993, &[]).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rating_returns_201(pool: PgPool) {
    let movie = seed_movie(&pool).await;

    let response = rate(&pool, movie, 8).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["movie_id"], movie);
    assert_eq!(json["data"]["score"], 8);
    assert!(json["data"]["rating_id"].is_number());
    assert!(json["data"]["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_scores_insert_nothing(pool: PgPool) {
    let movie = seed_movie(&pool).await;

    for score in [0, 11, -4] {
        let response = rate(&pool, movie, score).await;
        expect_failure(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    }
    assert_eq!(rating_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn boundary_scores_are_accepted(pool: PgPool) {
    let movie = seed_movie(&pool).await;

    assert_eq!(rate(&pool, movie, 1).await.status(), StatusCode::CREATED);
    assert_eq!(rate(&pool, movie, 10).await.status(), StatusCode::CREATED);
    assert_eq!(rating_count(&pool).await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_integer_score_is_rejected(pool: PgPool) {
    let movie = seed_movie(&pool).await;

    let response = common::post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/movies/{movie}/ratings"),
        serde_json::json!({"score": 7.5}),
    )
    .await;
    expect_failure(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    assert_eq!(rating_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rating_missing_movie_returns_404(pool: PgPool) {
    let response = rate(&pool, 4040, 5).await;
    let message = expect_failure(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert_eq!(message, "Movie with id 4040 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn average_is_null_until_rated(pool: PgPool) {
    let movie = seed_movie(&pool).await;
    let uri = format!("/api/v1/movies/{movie}");

    let json = body_json(get(common::build_test_app(pool.clone()), &uri).await).await;
    assert!(json["data"]["average_rating"].is_null());
    assert_eq!(json["data"]["ratings_count"], 0);

    rate(&pool, movie, 7).await;
    rate(&pool, movie, 9).await;

    let json = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(json["data"]["average_rating"], 8.0);
    assert_eq!(json["data"]["ratings_count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_ratings_oldest_first(pool: PgPool) {
    let movie = seed_movie(&pool).await;
    rate(&pool, movie, 3).await;
    rate(&pool, movie, 6).await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/movies/{movie}/ratings"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let scores: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["score"].as_i64().unwrap())
        .collect();
    assert_eq!(scores, vec![3, 6]);

    let response = get(common::build_test_app(pool), "/api/v1/movies/9999/ratings").await;
    expect_failure(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
