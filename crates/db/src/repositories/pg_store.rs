//! PostgreSQL-backed [`CatalogStore`].

use std::collections::HashMap;

use catalog_core::types::DbId;

use crate::models::genre::Genre;
use crate::models::movie::{Movie, MovieRecord};
use crate::models::person::Credit;
use crate::query::MovieQuery;
use crate::repositories::{CreditRepo, GenreRepo, MovieRepo};
use crate::store::{CatalogStore, StoreError};
use crate::DbPool;

/// Catalog store reading from PostgreSQL through a shared pool.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Load genres and credits for `movies` and pair them up, keeping the
    /// order of `movies`.
    async fn attach_relations(&self, movies: Vec<Movie>) -> Result<Vec<MovieRecord>, StoreError> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
        let mut records: Vec<MovieRecord> = movies.into_iter().map(MovieRecord::bare).collect();
        let position: HashMap<DbId, usize> =
            ids.iter().enumerate().map(|(idx, id)| (*id, idx)).collect();

        for link in GenreRepo::list_for_movies(&self.pool, &ids).await? {
            if let Some(&idx) = position.get(&link.movie_id) {
                records[idx].genres.push(link.genre);
            }
        }

        for credit in Credit::ALL {
            for link in CreditRepo::list_for_movies(&self.pool, credit, &ids).await? {
                if let Some(&idx) = position.get(&link.movie_id) {
                    records[idx].credits_mut(credit).push(link.person);
                }
            }
        }

        tracing::debug!(movies = records.len(), "Attached movie relations");
        Ok(records)
    }
}

impl CatalogStore for PgCatalogStore {
    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        Ok(GenreRepo::list(&self.pool).await?)
    }

    async fn genre_exists(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(GenreRepo::exists(&self.pool, id).await?)
    }

    async fn count_movies(&self, query: &MovieQuery) -> Result<i64, StoreError> {
        Ok(MovieRepo::count(&self.pool, query).await?)
    }

    async fn fetch_movies(
        &self,
        query: &MovieQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<MovieRecord>, StoreError> {
        let movies = MovieRepo::list(&self.pool, query, offset, limit).await?;
        self.attach_relations(movies).await
    }

    async fn find_movie(&self, id: DbId) -> Result<Option<MovieRecord>, StoreError> {
        let Some(movie) = MovieRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        Ok(self.attach_relations(vec![movie]).await?.pop())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
