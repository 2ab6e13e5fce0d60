use agency_core::types::DbId;
use async_trait::async_trait;

use super::{Page, RecordStore, StoreResult};
use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::repositories::{ActorRepo, MovieRepo};
use crate::DbPool;

/// [`RecordStore`] backed by PostgreSQL.
///
/// Updates run inside an explicit transaction: the row is locked, patched,
/// and committed. An early return drops the transaction, which rolls it back
/// and returns the connection to the pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, verify the connection and apply pending migrations.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::health_check(&pool).await?;
        tracing::debug!("Database health check passed");

        crate::run_migrations(&pool).await?;
        tracing::debug!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

fn limit_offset(page: Option<Page>) -> (Option<i64>, i64) {
    match page {
        Some(page) => (Some(page.limit()), page.offset()),
        None => (None, 0),
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list_actors(&self, page: Option<Page>) -> StoreResult<Vec<Actor>> {
        let (limit, offset) = limit_offset(page);
        Ok(ActorRepo::list(&self.pool, limit, offset).await?)
    }

    async fn find_actor(&self, id: DbId) -> StoreResult<Option<Actor>> {
        Ok(ActorRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_actor(&self, input: &CreateActor) -> StoreResult<Actor> {
        Ok(ActorRepo::create(&self.pool, input).await?)
    }

    async fn update_actor(&self, id: DbId, input: &UpdateActor) -> StoreResult<Option<Actor>> {
        let mut tx = self.pool.begin().await?;
        if ActorRepo::find_for_update(&mut *tx, id).await?.is_none() {
            tracing::debug!(actor_id = id, "Update target missing, rolling back");
            return Ok(None);
        }
        let actor = ActorRepo::update(&mut *tx, id, input).await?;
        tx.commit().await?;
        Ok(actor)
    }

    async fn delete_actor(&self, id: DbId) -> StoreResult<bool> {
        Ok(ActorRepo::delete(&self.pool, id).await?)
    }

    async fn list_movies(&self, page: Option<Page>) -> StoreResult<Vec<Movie>> {
        let (limit, offset) = limit_offset(page);
        Ok(MovieRepo::list(&self.pool, limit, offset).await?)
    }

    async fn find_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        Ok(MovieRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_movie(&self, input: &CreateMovie) -> StoreResult<Movie> {
        Ok(MovieRepo::create(&self.pool, input).await?)
    }

    async fn update_movie(&self, id: DbId, input: &UpdateMovie) -> StoreResult<Option<Movie>> {
        let mut tx = self.pool.begin().await?;
        if MovieRepo::find_for_update(&mut *tx, id).await?.is_none() {
            tracing::debug!(movie_id = id, "Update target missing, rolling back");
            return Ok(None);
        }
        let movie = MovieRepo::update(&mut *tx, id, input).await?;
        tx.commit().await?;
        Ok(movie)
    }

    async fn delete_movie(&self, id: DbId) -> StoreResult<bool> {
        Ok(MovieRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
