//! Storage layer for the movie catalog.
//!
//! - [`models`]: row structs for genres, persons, movies and associations
//! - [`query`]: the filtered movie query shared by every store
//! - [`store`]: the [`CatalogStore`] trait the HTTP layer is written against
//! - [`repositories`]: PostgreSQL repositories and [`PgCatalogStore`]
//! - [`memory`]: an in-process store for tests and data-loading tooling

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod query;
pub mod repositories;
pub mod store;

pub use memory::InMemoryCatalog;
pub use query::MovieQuery;
pub use repositories::PgCatalogStore;
pub use store::{CatalogStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
