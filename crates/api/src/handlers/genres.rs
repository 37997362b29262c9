//! Handler for the genre list.

use axum::extract::State;
use axum::Json;
use catalog_db::CatalogStore;

use crate::error::AppResult;
use crate::projection::GenreView;
use crate::state::AppState;

/// GET /genres/
///
/// All genres as a flat array, newest first.
pub async fn list_genres<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> AppResult<Json<Vec<GenreView>>> {
    let genres = state.store.list_genres().await?;

    Ok(Json(genres.iter().map(GenreView::from).collect()))
}
