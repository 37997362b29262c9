//! In-process [`CatalogStore`] for tests and data-loading tooling.
//!
//! Tables live behind a `parking_lot::RwLock`. Queries take the read lock
//! only; the insert helpers are the data-loading path and are never called
//! by the HTTP layer. Every insert draws a strictly increasing timestamp
//! from the store's clock, so insertion order is creation order unless a
//! caller supplies `created_at` explicitly.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use catalog_core::rating::PersonRole;
use catalog_core::types::{DbId, Timestamp};
use chrono::{Duration, Utc};
use parking_lot::RwLock;

use crate::models::genre::Genre;
use crate::models::movie::{Movie, MovieRecord, NewMovie};
use crate::models::person::{Credit, Person};
use crate::query::MovieQuery;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    genres: BTreeMap<DbId, Genre>,
    persons: BTreeMap<DbId, Person>,
    movies: BTreeMap<DbId, Movie>,
    /// `(movie_id, genre_id)` pairs.
    movie_genres: BTreeSet<(DbId, DbId)>,
    /// `(movie_id, person_id)` pairs, one set per credit.
    credits: BTreeMap<Credit, BTreeSet<(DbId, DbId)>>,
    next_genre_id: DbId,
    next_person_id: DbId,
    next_movie_id: DbId,
    last_timestamp: Option<Timestamp>,
    unavailable: Option<String>,
}

impl Tables {
    fn tick(&mut self) -> Timestamp {
        let now = Utc::now();
        let ts = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }

    fn check_available(&self) -> Result<(), StoreError> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn genre_ids_of(&self, movie_id: DbId) -> Vec<DbId> {
        self.movie_genres
            .range((movie_id, DbId::MIN)..=(movie_id, DbId::MAX))
            .map(|&(_, genre_id)| genre_id)
            .collect()
    }

    fn people_of(&self, credit: Credit, movie_id: DbId) -> Vec<Person> {
        let Some(pairs) = self.credits.get(&credit) else {
            return Vec::new();
        };
        pairs
            .range((movie_id, DbId::MIN)..=(movie_id, DbId::MAX))
            .filter_map(|(_, person_id)| self.persons.get(person_id).cloned())
            .collect()
    }

    /// Movies matching `query`, newest first, ties by ascending id.
    fn filtered(&self, query: &MovieQuery) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self
            .movies
            .values()
            .filter(|m| query.matches(&m.title, &self.genre_ids_of(m.id)))
            .collect();
        movies.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        movies
    }

    fn record(&self, movie: &Movie) -> MovieRecord {
        let mut record = MovieRecord::bare(movie.clone());
        record.genres = self
            .genre_ids_of(movie.id)
            .iter()
            .filter_map(|id| self.genres.get(id).cloned())
            .collect();
        for credit in Credit::ALL {
            *record.credits_mut(credit) = self.people_of(credit, movie.id);
        }
        record
    }
}

/// A catalog held entirely in memory. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a genre and return the stored row.
    pub fn insert_genre(&self, title: impl Into<String>) -> Genre {
        let mut t = self.tables.write();
        t.next_genre_id += 1;
        let now = t.tick();
        let genre = Genre {
            id: t.next_genre_id,
            title: title.into(),
            created_at: now,
            updated_at: now,
        };
        t.genres.insert(genre.id, genre.clone());
        genre
    }

    /// Insert a person and return the stored row.
    pub fn insert_person(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: PersonRole,
    ) -> Person {
        let mut t = self.tables.write();
        t.next_person_id += 1;
        let now = t.tick();
        let person = Person {
            id: t.next_person_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            created_at: now,
            updated_at: now,
        };
        t.persons.insert(person.id, person.clone());
        person
    }

    /// Insert a movie and return the stored row.
    pub fn insert_movie(&self, input: NewMovie) -> Movie {
        let mut t = self.tables.write();
        t.next_movie_id += 1;
        let now = t.tick();
        let created_at = input.created_at.unwrap_or(now);
        let movie = Movie {
            id: t.next_movie_id,
            title: input.title,
            description: input.description,
            release_year: input.release_year,
            mpa_rating: input.mpa_rating,
            imdb_rating: input.imdb_rating,
            duration: input.duration,
            poster: input.poster,
            bg_picture: input.bg_picture,
            created_at,
            updated_at: created_at,
        };
        t.movies.insert(movie.id, movie.clone());
        movie
    }

    /// Tag a movie with a genre. Returns `false` if either id is unknown.
    pub fn add_genre(&self, movie_id: DbId, genre_id: DbId) -> bool {
        let mut t = self.tables.write();
        if !t.movies.contains_key(&movie_id) || !t.genres.contains_key(&genre_id) {
            return false;
        }
        t.movie_genres.insert((movie_id, genre_id));
        true
    }

    /// Credit a person on a movie. Returns `false` if either id is unknown.
    pub fn add_credit(&self, movie_id: DbId, credit: Credit, person_id: DbId) -> bool {
        let mut t = self.tables.write();
        if !t.movies.contains_key(&movie_id) || !t.persons.contains_key(&person_id) {
            return false;
        }
        t.credits
            .entry(credit)
            .or_default()
            .insert((movie_id, person_id));
        true
    }

    /// Make every subsequent read fail with [`StoreError::Unavailable`]
    /// (`Some`) or succeed again (`None`).
    pub fn set_unavailable(&self, reason: Option<String>) {
        self.tables.write().unavailable = reason;
    }
}

impl CatalogStore for InMemoryCatalog {
    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        let t = self.tables.read();
        t.check_available()?;
        let mut genres: Vec<Genre> = t.genres.values().cloned().collect();
        genres.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(genres)
    }

    async fn genre_exists(&self, id: DbId) -> Result<bool, StoreError> {
        let t = self.tables.read();
        t.check_available()?;
        Ok(t.genres.contains_key(&id))
    }

    async fn count_movies(&self, query: &MovieQuery) -> Result<i64, StoreError> {
        let t = self.tables.read();
        t.check_available()?;
        Ok(t.filtered(query).len() as i64)
    }

    async fn fetch_movies(
        &self,
        query: &MovieQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<MovieRecord>, StoreError> {
        let t = self.tables.read();
        t.check_available()?;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(t.filtered(query)
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|m| t.record(m))
            .collect())
    }

    async fn find_movie(&self, id: DbId) -> Result<Option<MovieRecord>, StoreError> {
        let t = self.tables.read();
        t.check_available()?;
        Ok(t.movies.get(&id).map(|m| t.record(m)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.tables.read().check_available()
    }
}
