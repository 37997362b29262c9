//! Route definitions for the catalog read endpoints.

use axum::routing::get;
use axum::Router;
use catalog_db::CatalogStore;

use crate::handlers::{genres, movies};
use crate::state::AppState;

/// Catalog routes, mounted at the root.
///
/// ```text
/// GET /genres/        -> list_genres
/// GET /movies/        -> list_movies
/// GET /movies/{id}    -> get_movie
/// ```
pub fn router<S: CatalogStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/genres/", get(genres::list_genres::<S>))
        .route("/movies/", get(movies::list_movies::<S>))
        .route("/movies/{id}", get(movies::get_movie::<S>))
}
