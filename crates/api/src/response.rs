//! Response envelope types for API handlers.
//!
//! Successful responses carry `"success": true` next to a key named after the
//! resource (`actors`, `actor`, `movies`, `movie`) or the deleted id.

use agency_core::types::DbId;
use agency_db::models::actor::Actor;
use agency_db::models::movie::Movie;
use serde::Serialize;

/// `{ "success": true, "actors": [...] }`
#[derive(Debug, Serialize)]
pub struct ActorList {
    pub success: bool,
    pub actors: Vec<Actor>,
}

/// `{ "success": true, "actor": {...} }`
#[derive(Debug, Serialize)]
pub struct ActorBody {
    pub success: bool,
    pub actor: Actor,
}

/// `{ "success": true, "movies": [...] }`
#[derive(Debug, Serialize)]
pub struct MovieList {
    pub success: bool,
    pub movies: Vec<Movie>,
}

/// `{ "success": true, "movie": {...} }`
#[derive(Debug, Serialize)]
pub struct MovieBody {
    pub success: bool,
    pub movie: Movie,
}

/// `{ "success": true, "delete": <id> }` -- the id is echoed from the path.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
    pub delete: DbId,
}

/// Public greeting served at `/`.
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}
