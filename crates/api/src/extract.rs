//! Turning extractor rejections into the API's own error envelope.
//!
//! Handlers take `Result<Path<_>, PathRejection>` (and friends) instead of
//! the bare extractor so that a malformed request still answers with the
//! `{ success, error, message }` body rather than Axum's plain-text default.

use agency_core::types::DbId;
use agency_db::store::Page;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// Query parameters accepted by the list endpoints (`?page=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// Resolve a record id from the path. Ids that do not parse cannot name a
/// record, so they are reported as not found.
pub fn path_id(path: Result<Path<DbId>, PathRejection>) -> Result<DbId, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unparseable record id");
            Err(AppError::NotFound)
        }
    }
}

/// Unwrap a JSON body, mapping syntax and content-type errors to 400.
pub fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            Err(AppError::BadRequest("bad request".into()))
        }
    }
}

/// Resolve the optional `?page=N` parameter into a [`Page`] of `page_size`.
///
/// No parameter means no pagination. `N` must be an integer `>= 1`.
pub fn list_page(
    params: Result<Query<ListParams>, QueryRejection>,
    page_size: u32,
) -> Result<Option<Page>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        AppError::BadRequest("bad request".into())
    })?;

    let Some(raw) = params.page else {
        return Ok(None);
    };

    match raw.trim().parse::<u32>() {
        Ok(number) if number >= 1 => Ok(Some(Page {
            number,
            size: page_size,
        })),
        _ => Err(AppError::BadRequest(
            "page must be a positive Integer".into(),
        )),
    }
}
