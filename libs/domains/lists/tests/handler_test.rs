//! Handler tests for the Lists domain
//!
//! These tests drive the lists router over the in-memory repository and
//! verify status codes, headers and the JSON that goes over the wire.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_lists::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ListService::new(InMemoryListRepository::new()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create(app: &Router, title: &str) -> List {
    let response = app
        .clone()
        .oneshot(post_json("/", json!({ "title": title })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_list_returns_201() {
    let app = app();

    let list = create(&app, "Groceries").await;
    assert_eq!(list.title, "Groceries");

    let response = app
        .oneshot(get(&format!("/{}", list.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: List = json_body(response.into_body()).await;
    assert_eq!(fetched, list);
}

#[tokio::test]
async fn test_create_list_rejects_out_of_bounds_title() {
    let app = app();

    for title in [String::new(), "x".repeat(101)] {
        let response = app
            .clone()
            .oneshot(post_json("/", json!({ "title": title })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"], "title must be 1..100 chars");
    }
}

#[tokio::test]
async fn test_create_list_malformed_json() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from("{\"title\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["message"], "Invalid JSON format");
}

#[tokio::test]
async fn test_get_list_invalid_uuid_is_400() {
    let response = app().oneshot(get("/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_get_list_unknown_is_404() {
    let response = app()
        .oneshot(get(&format!("/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_lists_paginates_with_total_header() {
    let app = app();
    for i in 0..3 {
        create(&app, &format!("List {}", i)).await;
    }

    let response = app.clone().oneshot(get("/?limit=2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "3");
    let page: Vec<List> = json_body(response.into_body()).await;
    assert_eq!(page.len(), 2);
    assert!(page[0].created_at >= page[1].created_at);

    let response = app
        .oneshot(get("/?limit=abc&offset=-3"))
        .await
        .unwrap();
    let page: Vec<List> = json_body(response.into_body()).await;
    assert_eq!(page.len(), 3);
}

#[tokio::test]
async fn test_empty_collection_is_empty_array() {
    let response = app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "0");
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_lists() {
    let app = app();
    create(&app, "Weekly groceries").await;
    create(&app, "Work").await;

    let response = app
        .clone()
        .oneshot(get("/search?q=GROC"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let found: Vec<List> = json_body(response.into_body()).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Weekly groceries");

    let response = app.oneshot(get("/search?q=zzz")).await.unwrap();
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_without_query_is_plain_text_400() {
    for uri in ["/search", "/search?q="] {
        let response = app().oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Query parameter 'q' is required");
    }
}

#[tokio::test]
async fn test_update_list() {
    let app = app();
    let list = create(&app, "Old").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/{}", list.id))
                .body(Body::from(json!({ "title": "New" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: List = json_body(response.into_body()).await;
    assert_eq!(updated.id, list.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.created_at, list.created_at);
}

#[tokio::test]
async fn test_update_unknown_list_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/{}", uuid::Uuid::new_v4()))
                .body(Body::from(json!({ "title": "New" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_list_returns_204_then_404() {
    let app = app();
    let list = create(&app, "Temp").await;

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", list.id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
