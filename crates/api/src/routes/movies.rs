use agency_core::permissions::Permission;
use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::movies;
use crate::middleware::permission::guarded;
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET    /movies           -> list_movies   (get:movies)
/// POST   /movies           -> create_movie  (post:movies)
/// PATCH  /movies/{id}      -> update_movie  (patch:movies)
/// DELETE /movies/{id}      -> delete_movie  (delete:movies)
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            guarded(state, Permission::GetMovies, get(movies::list_movies))
                .merge(guarded(state, Permission::PostMovies, post(movies::create_movie))),
        )
        .route(
            "/movies/{id}",
            guarded(state, Permission::PatchMovies, patch(movies::update_movie))
                .merge(guarded(state, Permission::DeleteMovies, delete(movies::delete_movie))),
        )
}
