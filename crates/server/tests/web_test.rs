//! Router-level integration tests.
//!
//! Drive the axum application end to end with a small in-memory catalog,
//! encoding tables, and a real (tiny) hybrid model.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use catalog::{Catalog, Movie, Rating};
use encodings::{EncodingTables, GenreEncoder};
use predictor::{HybridModel, Predictor};
use server::{create_router, AppState};

fn build_test_state() -> AppState {
    let movies = vec![
        Movie {
            id: 1,
            title: "Toy Story (1995)".to_string(),
            genres: "Animation|Children's|Comedy".to_string(),
        },
        Movie {
            id: 2,
            title: "Heat (1995)".to_string(),
            genres: "Action|Crime|Thriller".to_string(),
        },
    ];
    let ratings = vec![
        Rating { user_id: 1, movie_id: 1, rating: 4.0, timestamp: 0 },
        Rating { user_id: 2, movie_id: 2, rating: 3.0, timestamp: 0 },
    ];
    let catalog = Arc::new(Catalog::build(movies, &ratings));

    let encodings = Arc::new(
        EncodingTables::new(
            HashMap::from([(1, 0), (2, 1)]),
            HashMap::from([(1, 0), (2, 1)]),
            GenreEncoder::new(vec!["Action".to_string(), "Comedy".to_string()]),
        )
        .expect("valid encoding tables"),
    );

    let model = HybridModel::from_parts(
        vec![vec![0.5, 0.5], vec![-0.5, 0.5]],
        vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        vec![0.1, -0.1],
        vec![0.0, 0.2],
        vec![0.3, -0.3],
        0.0,
    )
    .expect("valid model");
    let predictor: Arc<dyn Predictor> = Arc::new(model);

    AppState::new(catalog, encodings, predictor)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn test_get_index_serves_recommendations() {
    let app = create_router(build_test_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    // Unfiltered page for a random user: both movies listed
    assert!(page.contains("Toy Story (1995)"));
    assert!(page.contains("Heat (1995)"));
    assert!(!page.contains("class=\"error\""));
}

#[tokio::test]
async fn test_post_with_genre_filter() {
    let app = create_router(build_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("genres=Comedy&user_id=1"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Toy Story (1995)"));
    assert!(!page.contains("Heat (1995)"));
    // The submitted filter is echoed back into the form
    assert!(page.contains("value=\"Comedy\""));
}

#[tokio::test]
async fn test_post_without_genres_field_is_empty_filter() {
    let app = create_router(build_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("user_id=2"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Toy Story (1995)"));
    assert!(page.contains("Heat (1995)"));
}

#[tokio::test]
async fn test_post_unmatched_filter_shows_empty_notice() {
    let app = create_router(build_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("genres=Documentary&user_id=1"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("No movies matched"));
    assert!(!page.contains("class=\"error\""));
}

#[tokio::test]
async fn test_post_unknown_user_shows_error_banner() {
    let app = create_router(build_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("genres=&user_id=999"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("class=\"error\""));
    assert!(page.contains(server::WARNING_PREFIX));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(build_test_state());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["status"], "healthy");
}
