//! Shared helpers for the HTTP integration tests.
//!
//! Every test builds the production router via [`build_app_router`] over a
//! fresh [`MemoryStore`] (or a caller-supplied store) and drives it with
//! `tower::ServiceExt::oneshot`.
#![allow(dead_code)]

use std::sync::Arc;

use agency_api::auth::jwt::{generate_access_token, JwtConfig};
use agency_api::config::{ServerConfig, DEFAULT_PAGE_SIZE};
use agency_api::router::build_app_router;
use agency_api::state::AppState;
use agency_db::store::{MemoryStore, RecordStore};
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Every permission the API knows about.
pub const ALL_PERMISSIONS: [&str; 8] = [
    "get:actors",
    "get:movies",
    "post:actors",
    "post:movies",
    "patch:actors",
    "patch:movies",
    "delete:actors",
    "delete:movies",
];

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        audience: None,
        issuer: None,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        page_size: DEFAULT_PAGE_SIZE,
        database_url: None,
        jwt: jwt_config(),
    }
}

/// The full application over an empty in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()))
}

/// The full application over `store`.
pub fn build_test_app_with(store: Arc<dyn RecordStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// A valid one-hour bearer token granting `permissions`.
pub fn token(permissions: &[&str]) -> String {
    generate_access_token("auth0|tester", permissions, 3600, &jwt_config())
        .expect("token signing should succeed")
}

/// A token granting every permission.
pub fn admin_token() -> String {
    token(&ALL_PERMISSIONS)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, request(Method::GET, uri, token).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, request(Method::DELETE, uri, token).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, token, body).await
}

pub async fn patch_json(app: Router, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, token, body).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> Response<Body> {
    let request = request(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw, possibly malformed, JSON body.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let request = request(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Assert the error envelope and return nothing else of interest.
pub async fn assert_error(response: Response<Body>, status: u16, message: &str) {
    assert_eq!(response.status().as_u16(), status);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "success": false, "error": status, "message": message })
    );
}
