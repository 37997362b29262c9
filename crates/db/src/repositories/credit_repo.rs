//! Repository for the director, writer and star association tables.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{Credit, MovieCredit};

/// Provides read operations for movie credits.
pub struct CreditRepo;

impl CreditRepo {
    /// People holding `credit` on any of the given movies, ordered by movie
    /// then person id.
    pub async fn list_for_movies(
        pool: &PgPool,
        credit: Credit,
        movie_ids: &[DbId],
    ) -> Result<Vec<MovieCredit>, sqlx::Error> {
        let query = format!(
            "SELECT c.movie_id, p.id, p.first_name, p.last_name, p.role, \
                    p.created_at, p.updated_at \
             FROM {table} c \
             JOIN persons p ON p.id = c.person_id \
             WHERE c.movie_id = ANY($1) \
             ORDER BY c.movie_id, p.id",
            table = credit.table(),
        );
        sqlx::query_as::<_, MovieCredit>(&query)
            .bind(movie_ids)
            .fetch_all(pool)
            .await
    }
}
