//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use axum::body::{self, Body};
use axum::http::{Request, Response};
use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use seat_planner::config::{AppConfig, Config, DatabaseConfig};
use seat_planner::AppState;

/// Builds the real router over a fresh SQLite file. Keep the `TempDir`
/// alive for as long as the router is used.
pub async fn build_test_app() -> (TempDir, Router) {
    let (dir, _state, app) = build_test_state().await;
    (dir, app)
}

/// Same as [`build_test_app`] but also hands back the shared state.
pub async fn build_test_state() -> (TempDir, Arc<AppState>, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "seat_planner=debug".to_string(),
        },
        database: DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("seating.db").display()),
            pool_size: 2,
        },
    };

    let state = AppState::new(config).await.expect("app state");
    let app = seat_planner::router(state.clone());
    (dir, state, app)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    app.clone().oneshot(request).await.expect("response")
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request");
    app.clone().oneshot(request).await.expect("response")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json")
}
