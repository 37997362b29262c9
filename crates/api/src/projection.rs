//! External JSON shapes for catalog records.
//!
//! Projections flatten relations into nested `{id, title}` /
//! `{id, first_name, last_name}` objects and never touch the source rows.
//! Field order here is the field order on the wire.

use catalog_core::rating::{ImdbRating, MpaRating};
use catalog_core::types::DbId;
use catalog_db::models::genre::Genre;
use catalog_db::models::movie::MovieRecord;
use catalog_db::models::person::Person;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreView {
    pub id: DbId,
    pub title: String,
}

impl From<&Genre> for GenreView {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            title: genre.title.clone(),
        }
    }
}

/// A credited person. The role is implied by the list it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonView {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Person> for PersonView {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
        }
    }
}

/// Movie shape shared by the list and detail endpoints.
///
/// Unset images serialize as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub mpa_rating: MpaRating,
    pub imdb_rating: ImdbRating,
    pub duration: i32,
    pub poster: String,
    pub bg_picture: String,
    pub genres: Vec<GenreView>,
    pub directors: Vec<PersonView>,
    pub writers: Vec<PersonView>,
    pub stars: Vec<PersonView>,
}

impl From<&MovieRecord> for MovieView {
    fn from(record: &MovieRecord) -> Self {
        let movie = &record.movie;
        Self {
            id: movie.id,
            title: movie.title.clone(),
            description: movie.description.clone(),
            release_year: movie.release_year,
            mpa_rating: movie.mpa_rating,
            imdb_rating: movie.imdb_rating,
            duration: movie.duration,
            poster: movie.poster.clone().unwrap_or_default(),
            bg_picture: movie.bg_picture.clone().unwrap_or_default(),
            genres: record.genres.iter().map(GenreView::from).collect(),
            directors: people(&record.directors),
            writers: people(&record.writers),
            stars: people(&record.stars),
        }
    }
}

fn people(persons: &[Person]) -> Vec<PersonView> {
    persons.iter().map(PersonView::from).collect()
}
