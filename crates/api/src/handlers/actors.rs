//! Handlers for the actor resource.
//!
//! Every endpoint sits behind the permission gate, so by the time a handler
//! runs the caller is verified and available as [`Caller`].

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
use crate::response::{ActorBody, ActorList, Deleted};
use crate::state::AppState;

/// GET /actors
///
/// All actors in creation order, or one page of them with `?page=N`.
pub async fn list_actors(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let page = list_page(params, state.config.page_size)?;
    let actors = state
        .store
        .list_actors(page)
        .await
        .map_err(AppError::store(StatusCode::INTERNAL_SERVER_ERROR))?;

    Ok(Json(ActorList {
        success: true,
        actors,
    }))
}

/// POST /actors
pub async fn create_actor(
    Extension(caller): Extension<Caller>,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = payload::new_actor(&json_body(body)?)?;
    let actor = state
        .store
        .insert_actor(&input)
        .await
        .map_err(AppError::store(StatusCode::BAD_REQUEST))?;

    tracing::info!(actor_id = actor.id, subject = %caller.subject, "Actor created");

    Ok(Json(ActorBody {
        success: true,
        actor,
    }))
}

/// PATCH /actors/{id}
///
/// Applies only the supplied fields. The body is validated before the
/// record is looked up.
pub async fn update_actor(
    Extension(caller): Extension<Caller>,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path)?;
    let changes = payload::actor_changes(&json_body(body)?)?;

    let actor = state
        .store
        .update_actor(id, &changes)
        .await
        .map_err(AppError::store(StatusCode::INTERNAL_SERVER_ERROR))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;

    tracing::info!(actor_id = id, subject = %caller.subject, "Actor updated");

    Ok(Json(ActorBody {
        success: true,
        actor,
    }))
}

/// DELETE /actors/{id}
pub async fn delete_actor(
    Extension(caller): Extension<Caller>,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path)?;

    let deleted = state
        .store
        .delete_actor(id)
        .await
        .map_err(AppError::store(StatusCode::NOT_FOUND))?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }));
    }

    tracing::info!(actor_id = id, subject = %caller.subject, "Actor deleted");

    Ok(Json(Deleted {
        success: true,
        delete: id,
    }))
}
