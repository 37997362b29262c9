//! Integration tests for `GET /movies/{id}`.

mod common;

use axum::http::StatusCode;
use catalog_core::rating::{ImdbRating, MpaRating, PersonRole};
use catalog_db::models::movie::NewMovie;
use catalog_db::models::person::Credit;
use common::{bare_movie_json, body_bytes, body_json, get, new_movie, seed_catalog};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: existing movie returns the bare projection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn returns_movie_projection() {
    let app = common::build_test_app(seed_catalog());
    let response = get(app, "/movies/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, bare_movie_json(1, "TitleTest"));
}

#[tokio::test]
async fn includes_image_paths_and_rating() {
    let store = seed_catalog();
    let movie = store.insert_movie(NewMovie {
        mpa_rating: MpaRating::Nc17,
        imdb_rating: ImdbRating::from_hundredths(825).unwrap(),
        poster: Some("posters/heat.jpg".to_string()),
        bg_picture: Some("backgrounds/heat.jpg".to_string()),
        ..new_movie("Heat")
    });

    let app = common::build_test_app(store);
    let json = body_json(get(app, &format!("/movies/{}", movie.id)).await).await;

    assert_eq!(json["mpa_rating"], "NC-17");
    assert_eq!(json["imdb_rating"], "8.25");
    assert_eq!(json["poster"], "posters/heat.jpg");
    assert_eq!(json["bg_picture"], "backgrounds/heat.jpg");
}

// ---------------------------------------------------------------------------
// Test: credits are listed per role without exposing the role field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_credits_and_genres() {
    let store = seed_catalog();
    let director = store.insert_person("Michael", "Mann", PersonRole::Director);
    let actor = store.insert_person("Al", "Pacino", PersonRole::Actor);
    assert!(store.add_credit(1, Credit::Director, director.id));
    assert!(store.add_credit(1, Credit::Writer, director.id));
    assert!(store.add_credit(1, Credit::Star, actor.id));
    assert!(store.add_genre(1, 2));

    let app = common::build_test_app(store);
    let json = body_json(get(app, "/movies/1").await).await;

    let mann = json!({ "id": director.id, "first_name": "Michael", "last_name": "Mann" });
    assert_eq!(json["genres"], json!([{ "id": 2, "title": "TestName" }]));
    assert_eq!(json["directors"], json!([mann.clone()]));
    assert_eq!(json["writers"], json!([mann]));
    assert_eq!(
        json["stars"],
        json!([{ "id": actor.id, "first_name": "Al", "last_name": "Pacino" }])
    );
}

// ---------------------------------------------------------------------------
// Test: unknown ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_movie_is_not_found_envelope() {
    let app = common::build_test_app(seed_catalog());
    let response = get(app, "/movies/999").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "error": ["movie__not_found"] })
    );
}

#[tokio::test]
async fn overflowing_id_is_not_found_envelope() {
    let app = common::build_test_app(seed_catalog());
    let json = body_json(get(app, "/movies/99999999999999999999999").await).await;
    assert_eq!(json, json!({ "error": ["movie__not_found"] }));
}

#[tokio::test]
async fn non_numeric_id_is_a_plain_404() {
    for uri in ["/movies/abc", "/movies/-1", "/movies/1.5"] {
        let app = common::build_test_app(seed_catalog());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {uri}");
        assert!(body_bytes(response).await.is_empty(), "uri: {uri}");
    }
}

// ---------------------------------------------------------------------------
// Test: store failure maps to `internal`
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_is_internal() {
    let store = seed_catalog();
    store.set_unavailable(Some("connection refused".to_string()));

    let app = common::build_test_app(store);
    let json = body_json(get(app, "/movies/1").await).await;
    assert_eq!(json, json!({ "error": ["internal"] }));
}
