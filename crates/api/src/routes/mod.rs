pub mod actors;
pub mod health;
pub mod movies;

use axum::routing::get;
use axum::Router;

use crate::handlers::index;
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                    welcome message (public)
/// /health              store liveness (public)
///
/// /actors              list, create
/// /actors/{id}         update, delete
///
/// /movies              list, create
/// /movies/{id}         update, delete
/// ```
///
/// Every resource route is wrapped in the permission gate for its
/// `<verb>:<resource>` permission.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(index::root))
        .merge(health::router())
        .merge(actors::router(state))
        .merge(movies::router(state))
}
