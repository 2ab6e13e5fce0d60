//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use agency_api::error::AppError;
use agency_core::error::CoreError;
use agency_core::validation::ValidationError;
use agency_db::store::StoreError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_hides_entity_details() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Actor",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn validation_error_returns_400_with_its_message() {
    let (status, json) = error_to_response(ValidationError::NegativeAge.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], 400);
    assert_eq!(json["message"], "age must be a non-negative Integer");
}

#[tokio::test]
async fn non_object_body_returns_422() {
    let (status, json) = error_to_response(ValidationError::NotAnObject.into()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
}

#[tokio::test]
async fn unauthorized_never_reveals_the_reason() {
    let err = AppError::Core(CoreError::Unauthorized("permission not granted".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "unauthorized");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("secret connection string".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "internal server error");
}

#[tokio::test]
async fn store_error_uses_the_chosen_status_and_hides_the_cause() {
    for (status, message) in [
        (StatusCode::BAD_REQUEST, "bad request"),
        (StatusCode::NOT_FOUND, "resource not found"),
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
    ] {
        let err = AppError::store(status)(StoreError::Unavailable("db on fire".into()));

        let (got, json) = error_to_response(err).await;

        assert_eq!(got, status);
        assert_eq!(
            json,
            json!({"success": false, "error": status.as_u16(), "message": message})
        );
    }
}

#[tokio::test]
async fn method_not_allowed_returns_405() {
    let (status, json) = error_to_response(AppError::MethodNotAllowed).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["message"], "method not allowed");
}
