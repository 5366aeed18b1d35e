//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application router with the same middleware stack as
//! production (`build_app_router`) and provides small request/response
//! helpers around `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sca_api::config::ServerConfig;
use sca_api::router::build_app_router;
use sca_api::state::AppState;
use sca_breeds::fallback::fallback_directory;
use sca_breeds::{BreedDirectory, BreedSource, BreedSourceError, BreedValidator};
use sqlx::PgPool;
use tower::ServiceExt;

/// Breed source serving the built-in fallback set; no network involved.
struct StaticBreeds;

#[async_trait::async_trait]
impl BreedSource for StaticBreeds {
    async fn fetch(&self) -> Result<BreedDirectory, BreedSourceError> {
        Ok(fallback_directory())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        breed_api_url: "http://127.0.0.1:0/unused".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a static breed source.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        breeds: Arc::new(BreedValidator::new(Box::new(StaticBreeds))),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a cat via the API and return its ID.
pub async fn create_cat(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/cats",
        serde_json::json!({
            "name": name,
            "years_of_experience": 4,
            "breed": "Bengal",
            "salary": 1000,
        }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().unwrap()
}

/// Create a mission with the given target names and return its JSON.
pub async fn create_mission(pool: &PgPool, targets: &[&str]) -> serde_json::Value {
    let targets: Vec<serde_json::Value> = targets
        .iter()
        .map(|name| serde_json::json!({"name": name, "country": "Unknown"}))
        .collect();
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/missions",
        serde_json::json!({ "targets": targets }),
    )
    .await;
    body_json(response).await
}
