#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use catalog_core::rating::{ImdbRating, MpaRating};
use catalog_db::models::movie::NewMovie;
use catalog_db::InMemoryCatalog;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the given page size.
pub fn test_config(page_size: u32) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        page_size,
    }
}

/// Build the full application router over an in-memory store, with the
/// same middleware stack production uses.
pub fn build_test_app(store: InMemoryCatalog) -> Router {
    build_test_app_with_page_size(store, 10)
}

pub fn build_test_app_with_page_size(store: InMemoryCatalog, page_size: u32) -> Router {
    let state = AppState::new(store, test_config(page_size)).unwrap();
    build_app_router(state)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A movie with fixed placeholder values for everything but the title.
pub fn new_movie(title: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        description: "Test".to_string(),
        release_year: 2015,
        mpa_rating: MpaRating::G,
        imdb_rating: ImdbRating::from_hundredths(750).unwrap(),
        duration: 15,
        poster: None,
        bg_picture: None,
        created_at: None,
    }
}

/// Two genres (`GenreTest` = 1, `TestName` = 2) and two untagged movies
/// (`TitleTest` = 1, `TestTitle` = 2, created in that order).
pub fn seed_catalog() -> InMemoryCatalog {
    let store = InMemoryCatalog::new();
    store.insert_genre("GenreTest");
    store.insert_genre("TestName");
    store.insert_movie(new_movie("TitleTest"));
    store.insert_movie(new_movie("TestTitle"));
    store
}

/// The projection of a seeded movie with no relations.
pub fn bare_movie_json(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "Test",
        "release_year": 2015,
        "mpa_rating": "G",
        "imdb_rating": "7.50",
        "duration": 15,
        "poster": "",
        "bg_picture": "",
        "genres": [],
        "directors": [],
        "writers": [],
        "stars": [],
    })
}
