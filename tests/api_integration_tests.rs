//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against in-memory stores.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use note_cache::{
    api::create_router,
    store::{MemoryNoteStore, NoteStore, StoreKind},
    AppState, Note,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

const SEED_ID: &str = "b86847f9-4b98-417b-b09d-601eb9bf058e";

// == Helper Functions ==

struct TestApp {
    router: Router,
    primary: Arc<MemoryNoteStore>,
    cache: Arc<MemoryNoteStore>,
}

fn create_test_app() -> TestApp {
    let primary = Arc::new(MemoryNoteStore::new(StoreKind::Primary));
    let cache = Arc::new(MemoryNoteStore::new(StoreKind::Cache));
    let state = AppState::new(
        Some(primary.clone() as Arc<dyn NoteStore>),
        Some(cache.clone() as Arc<dyn NoteStore>),
    );
    TestApp {
        router: create_router(state),
        primary,
        cache,
    }
}

async fn body_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX).await.unwrap().to_vec()
}

async fn body_to_json(body: Body) -> Value {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn generate(app: &Router, body: Body) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generateData")
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
}

// == Seed Scenario ==

#[tokio::test]
async fn test_generate_then_get_note() {
    let app = create_test_app();

    let response = generate(&app.router, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response.into_body()).await.is_empty());

    let response = get(&app.router, &format!("/note/{}", SEED_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["Identity"], SEED_ID);
    assert_eq!(json["Description"], "Any desc");

    let response = get(&app.router, &format!("/cache/note/{}", SEED_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["Identity"], SEED_ID);
    assert_eq!(json["Description"], "Any desc");
}

#[tokio::test]
async fn test_generate_twice_is_idempotent() {
    let app = create_test_app();
    let id = Uuid::parse_str(SEED_ID).unwrap();

    for _ in 0..2 {
        let response = generate(&app.router, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(app.primary.count_identity(id).await, 1);
    assert_eq!(app.cache.count_identity(id).await, 1);
}

#[tokio::test]
async fn test_generate_with_payload() {
    let app = create_test_app();
    let id = Uuid::new_v4();
    let payload = format!(r#"{{"Identity":"{}","Description":"custom"}}"#, id);

    let response = generate(&app.router, Body::from(payload)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app.router, &format!("/note/{}", id)).await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["Description"], "custom");
}

#[tokio::test]
async fn test_generate_invalid_payload() {
    let app = create_test_app();

    let response = generate(&app.router, Body::from("{not json")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());

    assert!(app.primary.is_empty().await);
    assert!(app.cache.is_empty().await);
}

// == Lookup Tests ==

#[tokio::test]
async fn test_get_unseeded_note_is_null() {
    let app = create_test_app();

    for uri in ["/note", "/cache/note"] {
        let response = get(&app.router, &format!("{}/{}", uri, Uuid::new_v4())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_to_json(response.into_body()).await;
        assert!(json.is_null());
    }
}

#[tokio::test]
async fn test_cache_miss_does_not_fall_back() {
    let app = create_test_app();
    let note = Note::new(Uuid::new_v4(), "primary only");
    app.primary.insert(&note).await.unwrap();

    let response = get(&app.router, &format!("/note/{}", note.identity)).await;
    assert!(!body_to_json(response.into_body()).await.is_null());

    let response = get(&app.router, &format!("/cache/note/{}", note.identity)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_to_json(response.into_body()).await.is_null());
}

#[tokio::test]
async fn test_stores_may_diverge() {
    let app = create_test_app();
    let id = Uuid::new_v4();
    app.primary.insert(&Note::new(id, "canonical")).await.unwrap();
    app.cache.insert(&Note::new(id, "stale")).await.unwrap();

    let response = get(&app.router, &format!("/note/{}", id)).await;
    assert_eq!(body_to_json(response.into_body()).await["Description"], "canonical");

    let response = get(&app.router, &format!("/cache/note/{}", id)).await;
    assert_eq!(body_to_json(response.into_body()).await["Description"], "stale");
}

#[tokio::test]
async fn test_get_invalid_identifier() {
    let app = create_test_app();

    let response = get(&app.router, "/note/12345").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Configuration Tests ==

#[tokio::test]
async fn test_missing_cache_store() {
    let primary: Arc<dyn NoteStore> = Arc::new(MemoryNoteStore::new(StoreKind::Primary));
    let app = create_router(AppState::new(Some(primary), None));

    let response = get(&app, &format!("/note/{}", SEED_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &format!("/cache/note/{}", SEED_ID)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("cache"));

    let response = generate(&app, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = get(&app.router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["primary_configured"], true);
    assert_eq!(json["cache_configured"], true);
}
