//! HTTP-level integration tests for the `/cats` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_cat, delete, get, patch_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_returns_201(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/cats",
        serde_json::json!({
            "name": "Agent Whiskers",
            "years_of_experience": 4,
            "breed": "Bengal",
            "salary": 1000,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Agent Whiskers");
    assert_eq!(json["breed"], "Bengal");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_unknown_breed_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/cats",
        serde_json::json!({
            "name": "Agent Whiskers",
            "years_of_experience": 4,
            "breed": "Chupacabra",
            "salary": 1000,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BREED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_negative_salary_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/cats",
        serde_json::json!({
            "name": "Agent Whiskers",
            "years_of_experience": 4,
            "breed": "Bengal",
            "salary": -5,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_cats_with_pagination(pool: PgPool) {
    for i in 0..3 {
        create_cat(&pool, &format!("Cat {i}")).await;
    }

    let response = get(build_test_app(pool.clone()), "/api/v1/cats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let response = get(build_test_app(pool), "/api/v1/cats?skip=1&limit=1").await;
    let json = body_json(response).await;
    let page = json.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["name"], "Cat 1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_cat_by_id_and_404(pool: PgPool) {
    let id = create_cat(&pool, "Agent Whiskers").await;

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Agent Whiskers");

    let response = get(build_test_app(pool), "/api/v1/cats/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_salary(pool: PgPool) {
    let id = create_cat(&pool, "Agent Whiskers").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/cats/{id}/salary"),
        serde_json::json!({"salary": 2500}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["salary"], 2500);
    assert_eq!(json["name"], "Agent Whiskers");

    let response = patch_json(
        build_test_app(pool),
        "/api/v1/cats/999999/salary",
        serde_json::json!({"salary": 2500}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cat(pool: PgPool) {
    let id = create_cat(&pool, "Agent Whiskers").await;

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &format!("/api/v1/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cat_with_active_mission_returns_409(pool: PgPool) {
    let cat_id = create_cat(&pool, "Agent Whiskers").await;
    let mission = common::create_mission(&pool, &["Dr. No"]).await;
    let mission_id = mission["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/missions/{mission_id}/assign"),
        serde_json::json!({"cat_id": cat_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/cats/{cat_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CAT_HAS_ACTIVE_MISSION");

    // The cat is still there.
    let response = get(build_test_app(pool), &format!("/api/v1/cats/{cat_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
