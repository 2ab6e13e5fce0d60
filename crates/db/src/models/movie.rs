//! Movie entity model and DTOs.

use agency_core::types::DbId;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A movie row from the `movies` table.
///
/// `release_date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
}

/// Validated input for creating a movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: NaiveDate,
}

/// Validated partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl UpdateMovie {
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(release_date) = self.release_date {
            movie.release_date = release_date;
        }
    }
}
