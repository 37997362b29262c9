//! Genre model.

use std::fmt;

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A genre joined through `movie_genres`, tagged with the owning movie.
#[derive(Debug, Clone, FromRow)]
pub struct MovieGenre {
    pub movie_id: DbId,
    #[sqlx(flatten)]
    pub genre: Genre,
}
