//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept any `PgExecutor` as the first argument, so the same query runs
//! against the pool or inside an open transaction.

pub mod actor_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use movie_repo::MovieRepo;
