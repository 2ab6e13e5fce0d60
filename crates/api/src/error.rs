use agency_core::error::CoreError;
use agency_core::validation::ValidationError;
use agency_db::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the
/// `{ "success": false, "error": <status>, "message": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agency_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route, or a path id that does not resolve.
    #[error("Resource not found")]
    NotFound,

    /// The path exists but the verb is not defined for it.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The record store failed. The status depends on which operation was
    /// running; the underlying error is logged, never returned.
    #[error("Store failure ({status}): {source}")]
    Store {
        status: StatusCode,
        #[source]
        source: StoreError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl AppError {
    /// Build a `map_err` adapter that reports store failures with `status`.
    ///
    /// ```ignore
    /// state.store.insert_actor(&input).await.map_err(AppError::store(StatusCode::BAD_REQUEST))?;
    /// ```
    pub fn store(status: StatusCode) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { status, source }
    }
}

/// Fixed client-facing message for statuses that carry no detail.
fn canned_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        StatusCode::INTERNAL_SERVER_ERROR => "internal server error",
        other => other.canonical_reason().unwrap_or("error"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Record not found");
                    (StatusCode::NOT_FOUND, canned_message(StatusCode::NOT_FOUND).to_string())
                }
                CoreError::Validation(ValidationError::NotAnObject) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ValidationError::NotAnObject.to_string(),
                ),
                CoreError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
                // Every denial looks the same to the caller; the reason was
                // logged by the permission gate.
                CoreError::Unauthorized(_) => (
                    StatusCode::UNAUTHORIZED,
                    canned_message(StatusCode::UNAUTHORIZED).to_string(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        canned_message(StatusCode::INTERNAL_SERVER_ERROR).to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                canned_message(StatusCode::NOT_FOUND).to_string(),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                canned_message(StatusCode::METHOD_NOT_ALLOWED).to_string(),
            ),

            // --- Store errors ---
            AppError::Store { status, source } => {
                tracing::error!(error = %source, status = status.as_u16(), "Record store failure");
                (*status, canned_message(*status).to_string())
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
