use std::future::Future;

use catalog_core::types::DbId;

use crate::models::genre::Genre;
use crate::models::movie::MovieRecord;
use crate::query::MovieQuery;

/// Failure reported by a catalog store.
///
/// Every variant surfaces to API clients as the `internal` error kind.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the catalog.
///
/// Movie listings are ordered newest-created first, ties broken by
/// ascending id. Related genres and people inside a [`MovieRecord`] are
/// ordered by ascending id. No method mutates the store.
pub trait CatalogStore: Clone + Send + Sync + 'static {
    /// All genres, newest-created first.
    fn list_genres(&self) -> impl Future<Output = Result<Vec<Genre>, StoreError>> + Send;

    /// Whether a genre with this id exists.
    fn genre_exists(&self, id: DbId) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Number of movies matching `query`.
    fn count_movies(
        &self,
        query: &MovieQuery,
    ) -> impl Future<Output = Result<i64, StoreError>> + Send;

    /// One ordered slice of the movies matching `query`.
    fn fetch_movies(
        &self,
        query: &MovieQuery,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<MovieRecord>, StoreError>> + Send;

    /// A single movie with its relations, or `None` if the id is unknown.
    fn find_movie(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<MovieRecord>, StoreError>> + Send;

    /// Check that the store can serve requests.
    fn ping(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
}
