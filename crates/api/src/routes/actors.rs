use agency_core::permissions::Permission;
use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::actors;
use crate::middleware::permission::guarded;
use crate::state::AppState;

/// Actor routes.
///
/// ```text
/// GET    /actors           -> list_actors   (get:actors)
/// POST   /actors           -> create_actor  (post:actors)
/// PATCH  /actors/{id}      -> update_actor  (patch:actors)
/// DELETE /actors/{id}      -> delete_actor  (delete:actors)
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/actors",
            guarded(state, Permission::GetActors, get(actors::list_actors))
                .merge(guarded(state, Permission::PostActors, post(actors::create_actor))),
        )
        .route(
            "/actors/{id}",
            guarded(state, Permission::PatchActors, patch(actors::update_actor))
                .merge(guarded(state, Permission::DeleteActors, delete(actors::delete_actor))),
        )
}
