//! Person model and movie credit associations.

use std::fmt;

use catalog_core::rating::PersonRole;
use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `persons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(try_from = "String")]
    pub role: PersonRole,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.role)
    }
}

/// The three independent person lists a movie carries.
///
/// Each maps to its own association table, so one person can direct one
/// movie and star in another, or hold several credits on the same movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Credit {
    Director,
    Writer,
    Star,
}

impl Credit {
    pub const ALL: [Credit; 3] = [Credit::Director, Credit::Writer, Credit::Star];

    /// The association table holding this credit.
    pub fn table(self) -> &'static str {
        match self {
            Credit::Director => "movie_directors",
            Credit::Writer => "movie_writers",
            Credit::Star => "movie_stars",
        }
    }
}

/// A person joined through one of the credit tables, tagged with the movie.
#[derive(Debug, Clone, FromRow)]
pub struct MovieCredit {
    pub movie_id: DbId,
    #[sqlx(flatten)]
    pub person: Person,
}
