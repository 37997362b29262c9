//! Movie model, the assembled movie record, and the insert DTO.

use std::fmt;

use catalog_core::rating::{ImdbRating, MpaRating};
use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::genre::Genre;
use crate::models::person::{Credit, Person};

/// A row from the `movies` table.
///
/// `imdb_rating` is selected as hundredths (`INT2`) and validated on decode.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    #[sqlx(try_from = "String")]
    pub mpa_rating: MpaRating,
    #[sqlx(try_from = "i16")]
    pub imdb_rating: ImdbRating,
    pub duration: i32,
    pub poster: Option<String>,
    pub bg_picture: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A movie together with its genres and credited people.
#[derive(Debug, Clone)]
pub struct MovieRecord {
    pub movie: Movie,
    pub genres: Vec<Genre>,
    pub directors: Vec<Person>,
    pub writers: Vec<Person>,
    pub stars: Vec<Person>,
}

impl MovieRecord {
    /// Wrap a movie with empty relation lists.
    pub fn bare(movie: Movie) -> Self {
        Self {
            movie,
            genres: Vec::new(),
            directors: Vec::new(),
            writers: Vec::new(),
            stars: Vec::new(),
        }
    }

    pub fn credits_mut(&mut self, credit: Credit) -> &mut Vec<Person> {
        match credit {
            Credit::Director => &mut self.directors,
            Credit::Writer => &mut self.writers,
            Credit::Star => &mut self.stars,
        }
    }
}

/// DTO for inserting a movie through the data-loading path.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub mpa_rating: MpaRating,
    pub imdb_rating: ImdbRating,
    pub duration: i32,
    pub poster: Option<String>,
    pub bg_picture: Option<String>,
    /// Explicit creation time; the store's clock is used when `None`.
    pub created_at: Option<Timestamp>,
}
