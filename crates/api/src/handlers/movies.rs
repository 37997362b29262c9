//! Handlers for the movie list and movie detail.
//!
//! Every outcome is HTTP 200; failures carry `{"error": [kind]}`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::error::ErrorKind;
use catalog_core::filters::{non_empty, parse_genre_token, SearchPhrase};
use catalog_core::types::DbId;
use catalog_db::{CatalogStore, MovieQuery};

use crate::error::{AppError, AppResult};
use crate::projection::MovieView;
use crate::query::MovieListParams;
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /movies/?genre_id=&src=&page=
///
/// Filters are checked fail-fast in a fixed order: `genre_id`, `src`, then
/// `page` once the filtered total is known. Both filters exclude matches.
pub async fn list_movies<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<PageResponse<MovieView>>> {
    let params = MovieListParams::from_pairs(pairs);
    let query = build_movie_query(&state.store, &params).await?;

    let total = state.store.count_movies(&query).await?;
    let window = state.paginator.page(params.page.as_deref(), total)?;

    let records = state
        .store
        .fetch_movies(&query, window.offset, window.limit)
        .await?;

    tracing::debug!(
        page = window.number,
        total,
        returned = records.len(),
        "Listed movies"
    );

    Ok(Json(PageResponse {
        pages: window.number,
        total,
        results: records.iter().map(MovieView::from).collect(),
    }))
}

/// Turn the raw filter parameters into a [`MovieQuery`].
///
/// An empty parameter value counts as absent.
async fn build_movie_query<S: CatalogStore>(
    store: &S,
    params: &MovieListParams,
) -> AppResult<MovieQuery> {
    let mut query = MovieQuery::all();

    if let Some(raw) = non_empty(params.genre_id.as_deref()) {
        let genre_id = parse_genre_token(raw)?;
        if !store.genre_exists(genre_id).await? {
            return Err(AppError::Rejected(ErrorKind::GenreInvalid));
        }
        query = query.excluding_genre(genre_id);
    }

    if let Some(raw) = non_empty(params.src.as_deref()) {
        query = query.excluding_title_prefix(SearchPhrase::parse(raw)?);
    }

    Ok(query)
}

/// GET /movies/{id}
///
/// The id segment must be ASCII digits, otherwise the route does not match
/// and the response is a bare 404. A digit string too large for an id
/// cannot name a movie and reports `movie__not_found`.
pub async fn get_movie<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    if raw_id.is_empty() || !raw_id.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let Ok(movie_id) = raw_id.parse::<DbId>() else {
        return Err(AppError::Rejected(ErrorKind::MovieNotFound));
    };

    let record = state
        .store
        .find_movie(movie_id)
        .await?
        .ok_or(AppError::Rejected(ErrorKind::MovieNotFound))?;

    Ok(Json(MovieView::from(&record)).into_response())
}
