//! Handlers for the movie resource.

use agency_core::error::CoreError;
use agency_core::types::DbId;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{json_body, list_page, path_id, ListParams};
use crate::middleware::permission::Caller;
use crate::payload;
use crate::response::{Deleted, MovieBody, MovieList};
use crate::state::AppState;

/// GET /movies
pub async fn list_movies(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let page = list_page(params, state.config.page_size)?;
    let movies = state
        .store
        .list_movies(page)
        .await
        .map_err(AppError::store(StatusCode::INTERNAL_SERVER_ERROR))?;

    Ok(Json(MovieList {
        success: true,
        movies,
    }))
}

/// POST /movies
pub async fn create_movie(
    Extension(caller): Extension<Caller>,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = payload::new_movie(&json_body(body)?)?;
    let movie = state
        .store
        .insert_movie(&input)
        .await
        .map_err(AppError::store(StatusCode::BAD_REQUEST))?;

    tracing::info!(movie_id = movie.id, subject = %caller.subject, "Movie created");

    Ok(Json(MovieBody {
        success: true,
        movie,
    }))
}

/// PATCH /movies/{id}
pub async fn update_movie(
    Extension(caller): Extension<Caller>,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path)?;
    let changes = payload::movie_changes(&json_body(body)?)?;

    let movie = state
        .store
        .update_movie(id, &changes)
        .await
        .map_err(AppError::store(StatusCode::INTERNAL_SERVER_ERROR))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;

    tracing::info!(movie_id = id, subject = %caller.subject, "Movie updated");

    Ok(Json(MovieBody {
        success: true,
        movie,
    }))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    Extension(caller): Extension<Caller>,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path)?;

    let deleted = state
        .store
        .delete_movie(id)
        .await
        .map_err(AppError::store(StatusCode::NOT_FOUND))?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    tracing::info!(movie_id = id, subject = %caller.subject, "Movie deleted");

    Ok(Json(Deleted {
        success: true,
        delete: id,
    }))
}
