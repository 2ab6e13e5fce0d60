//! Repository for the `actors` table.

use agency_core::types::DbId;
use agency_core::validation::Gender;
use sqlx::PgExecutor;

use crate::models::actor::{Actor, CreateActor, UpdateActor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, gender";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateActor,
    ) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, age, gender)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.gender.as_str())
            .fetch_one(executor)
            .await
    }

    /// Find an actor by its ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an actor and lock its row until the surrounding transaction ends.
    pub async fn find_for_update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List actors in creation order.
    ///
    /// A `None` limit returns every row from `offset` onwards.
    pub async fn list<'e>(
        executor: impl PgExecutor<'e>,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM actors
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await
    }

    /// Update an actor. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.gender.map(Gender::as_str))
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete an actor by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
