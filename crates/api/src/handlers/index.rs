//! Public root endpoint and the JSON fallbacks for unrouted requests.

use axum::Json;

use crate::error::AppError;
use crate::response::Welcome;

/// GET /
pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Agency API",
    })
}

/// Fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths requested with an unsupported verb.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
