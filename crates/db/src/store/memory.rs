use std::collections::BTreeMap;

use agency_core::types::DbId;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Page, RecordStore, StoreResult};
use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// [`RecordStore`] held entirely in process memory.
///
/// Ids are assigned from a per-table counter starting at 1 and are never
/// reused, so `BTreeMap` iteration order is creation order. Each call holds
/// the lock for its whole duration, which makes every operation atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    actors: BTreeMap<DbId, Actor>,
    movies: BTreeMap<DbId, Movie>,
    last_actor_id: DbId,
    last_movie_id: DbId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T: Clone>(rows: &BTreeMap<DbId, T>, page: Option<Page>) -> Vec<T> {
    let values = rows.values().cloned();
    match page {
        Some(page) => values
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect(),
        None => values.collect(),
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_actors(&self, page: Option<Page>) -> StoreResult<Vec<Actor>> {
        Ok(paginate(&self.tables.read().await.actors, page))
    }

    async fn find_actor(&self, id: DbId) -> StoreResult<Option<Actor>> {
        Ok(self.tables.read().await.actors.get(&id).cloned())
    }

    async fn insert_actor(&self, input: &CreateActor) -> StoreResult<Actor> {
        let mut tables = self.tables.write().await;
        tables.last_actor_id += 1;
        let actor = Actor {
            id: tables.last_actor_id,
            name: input.name.clone(),
            age: input.age,
            gender: input.gender,
        };
        tables.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn update_actor(&self, id: DbId, input: &UpdateActor) -> StoreResult<Option<Actor>> {
        let mut tables = self.tables.write().await;
        Ok(tables.actors.get_mut(&id).map(|actor| {
            input.apply_to(actor);
            actor.clone()
        }))
    }

    async fn delete_actor(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.actors.remove(&id).is_some())
    }

    async fn list_movies(&self, page: Option<Page>) -> StoreResult<Vec<Movie>> {
        Ok(paginate(&self.tables.read().await.movies, page))
    }

    async fn find_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        Ok(self.tables.read().await.movies.get(&id).cloned())
    }

    async fn insert_movie(&self, input: &CreateMovie) -> StoreResult<Movie> {
        let mut tables = self.tables.write().await;
        tables.last_movie_id += 1;
        let movie = Movie {
            id: tables.last_movie_id,
            title: input.title.clone(),
            release_date: input.release_date,
        };
        tables.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update_movie(&self, id: DbId, input: &UpdateMovie) -> StoreResult<Option<Movie>> {
        let mut tables = self.tables.write().await;
        Ok(tables.movies.get_mut(&id).map(|movie| {
            input.apply_to(movie);
            movie.clone()
        }))
    }

    async fn delete_movie(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.movies.remove(&id).is_some())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
