//! Actor entity model and DTOs.

use agency_core::types::DbId;
use agency_core::validation::Gender;
use serde::Serialize;
use sqlx::FromRow;

/// An actor row from the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    /// `CHAR(1)` column constrained to `M` / `F`.
    #[sqlx(try_from = "String")]
    pub gender: Gender,
}

/// Validated input for creating an actor.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
}

/// Validated partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl UpdateActor {
    /// Apply the supplied fields to `actor` in place.
    pub fn apply_to(&self, actor: &mut Actor) {
        if let Some(name) = &self.name {
            actor.name = name.clone();
        }
        if let Some(age) = self.age {
            actor.age = age;
        }
        if let Some(gender) = self.gender {
            actor.gender = gender;
        }
    }
}
