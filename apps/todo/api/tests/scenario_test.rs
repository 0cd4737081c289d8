//! End-to-end walk through the composed API over in-memory repositories.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use axum_helpers::health_router;
use domain_lists::InMemoryListRepository;
use domain_tasks::InMemoryTaskRepository;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use todo_api::{api, openapi::ApiDoc};
use tower::ServiceExt;

fn app() -> Router {
    axum_helpers::create_router::<ApiDoc>(
        api::compose(InMemoryListRepository::new(), InMemoryTaskRepository::new()),
        health_router(),
    )
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| json!(String::from_utf8_lossy(&bytes)))
    };
    (status, headers, value)
}

#[tokio::test]
async fn test_list_and_task_lifecycle() {
    let app = app();

    let (status, _, list) = send(
        &app,
        "POST",
        "/api/v1/lists",
        Some(json!({"title": "Groceries"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let list_id = list["id"].as_str().unwrap().to_string();

    for text in ["milk", "eggs", "bread"] {
        let (status, _, task) = send(
            &app,
            "POST",
            &format!("/api/v1/lists/{}/tasks", list_id),
            Some(json!({"text": text})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(task["list_id"], list_id.as_str());
        assert_eq!(task["completed"], false);
    }

    let (status, headers, page) = send(
        &app,
        "GET",
        &format!("/api/v1/lists/{}/tasks?limit=2&offset=0", list_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["x-total-count"], "3");
    assert_eq!(page.as_array().unwrap().len(), 2);

    let task_id = page[0]["id"].as_str().unwrap().to_string();
    let (status, _, updated) = send(
        &app,
        "PATCH",
        &format!("/api/v1/tasks/{}", task_id),
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["text"], page[0]["text"]);

    let (status, _, found) = send(&app, "GET", "/api/v1/lists/search?q=groc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);

    let (status, _, _) = send(&app, "DELETE", &format!("/api/v1/tasks/{}", task_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, missing) = send(&app, "GET", &format!("/api/v1/tasks/{}", task_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["code"], "NOT_FOUND");

    let (status, _, _) = send(&app, "DELETE", &format!("/api/v1/lists/{}", list_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = send(&app, "GET", &format!("/api/v1/lists/{}", list_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_for_unknown_list_is_rejected() {
    let app = app();

    let (status, _, body) = send(
        &app,
        "POST",
        "/api/v1/lists/00000000-0000-0000-0000-000000000001/tasks",
        Some(json!({"text": "orphan"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_invalid_identifier_is_rejected() {
    let (status, _, body) = send(&app(), "GET", "/api/v1/tasks/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_unknown_route_and_request_id() {
    let (status, headers, body) = send(&app(), "GET", "/api/v2/nothing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_health_preflight_is_answered_by_cors() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_health_carries_request_id() {
    let (status, headers, body) = send(&app(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(headers.contains_key("x-request-id"));
}
