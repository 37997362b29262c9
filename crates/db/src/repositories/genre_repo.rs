//! Repository for the `genres` and `movie_genres` tables.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{Genre, MovieGenre};

/// Column list for `genres` queries.
const COLUMNS: &str = "id, title, created_at, updated_at";

/// Provides read operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY created_at DESC, id ASC");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Whether a genre with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Genres attached to any of the given movies, ordered by movie then genre id.
    pub async fn list_for_movies(
        pool: &PgPool,
        movie_ids: &[DbId],
    ) -> Result<Vec<MovieGenre>, sqlx::Error> {
        sqlx::query_as::<_, MovieGenre>(
            "SELECT mg.movie_id, g.id, g.title, g.created_at, g.updated_at \
             FROM movie_genres mg \
             JOIN genres g ON g.id = mg.genre_id \
             WHERE mg.movie_id = ANY($1) \
             ORDER BY mg.movie_id, g.id",
        )
        .bind(movie_ids)
        .fetch_all(pool)
        .await
    }
}
