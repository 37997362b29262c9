//! Repository for the `movies` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Movie;
use crate::query::{MovieQuery, MOVIE_ORDER_BY};

/// Column list for `movies m` queries. The rating is read as hundredths.
const COLUMNS: &str = "\
    m.id, m.title, m.description, m.release_year, m.mpa_rating, \
    ROUND(m.imdb_rating * 100)::INT2 AS imdb_rating, m.duration, \
    m.poster, m.bg_picture, m.created_at, m.updated_at";

/// Provides read operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Count the movies matching `filter`.
    pub async fn count(pool: &PgPool, filter: &MovieQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = filter.where_clause(1);
        let query = format!("SELECT COUNT(*)::BIGINT FROM movies m {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(genre_id) = filter.excluded_genre() {
            q = q.bind(genre_id);
        }
        if let Some(phrase) = filter.excluded_title_prefix() {
            q = q.bind(phrase.as_str().to_string());
        }
        q.fetch_one(pool).await
    }

    /// Fetch one ordered page of the movies matching `filter`.
    pub async fn list(
        pool: &PgPool,
        filter: &MovieQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let (where_clause, bind_idx) = filter.where_clause(1);
        let query = format!(
            "SELECT {COLUMNS} FROM movies m \
             {where_clause} \
             {MOVIE_ORDER_BY} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Movie>(&query);
        if let Some(genre_id) = filter.excluded_genre() {
            q = q.bind(genre_id);
        }
        if let Some(phrase) = filter.excluded_title_prefix() {
            q = q.bind(phrase.as_str().to_string());
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies m WHERE m.id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
