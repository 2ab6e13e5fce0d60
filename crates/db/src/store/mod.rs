//! The record store seam between HTTP handlers and persistence.
//!
//! Handlers only ever see `Arc<dyn RecordStore>`. Each method is one atomic
//! unit of work: it either fully succeeds or leaves no partial state.

use agency_core::types::DbId;
use async_trait::async_trait;

use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failures raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One page of a listing. `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.number.saturating_sub(1)) * i64::from(self.size)
    }
}

/// CRUD primitives over actors and movies.
///
/// Listings come back in creation order. `update_*` returns `None` and
/// `delete_*` returns `false` when the id does not resolve to a record.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_actors(&self, page: Option<Page>) -> StoreResult<Vec<Actor>>;
    async fn find_actor(&self, id: DbId) -> StoreResult<Option<Actor>>;
    async fn insert_actor(&self, input: &CreateActor) -> StoreResult<Actor>;
    async fn update_actor(&self, id: DbId, input: &UpdateActor) -> StoreResult<Option<Actor>>;
    async fn delete_actor(&self, id: DbId) -> StoreResult<bool>;

    async fn list_movies(&self, page: Option<Page>) -> StoreResult<Vec<Movie>>;
    async fn find_movie(&self, id: DbId) -> StoreResult<Option<Movie>>;
    async fn insert_movie(&self, input: &CreateMovie) -> StoreResult<Movie>;
    async fn update_movie(&self, id: DbId, input: &UpdateMovie) -> StoreResult<Option<Movie>>;
    async fn delete_movie(&self, id: DbId) -> StoreResult<bool>;

    /// Cheap liveness probe used by `/health`.
    async fn health_check(&self) -> StoreResult<()>;
}
