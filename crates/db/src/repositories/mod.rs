//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. [`PgCatalogStore`] composes
//! them into the [`CatalogStore`](crate::store::CatalogStore) the API uses.

pub mod credit_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod pg_store;

pub use credit_repo::CreditRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use pg_store::PgCatalogStore;
