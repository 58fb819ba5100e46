//! HTTP endpoint tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot` over an
//! in-memory graph store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use taskgraph_core::{SurrealGraphStore, TaskService};
use taskgraph_server::create_router;
use tower::ServiceExt;

async fn create_test_app() -> Router {
    let store = Arc::new(SurrealGraphStore::new_in_memory().await.unwrap());
    create_router(TaskService::new(store))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["status"], "ok");
}

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_create_returns_created_task() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/tasks",
        Some(json!({ "title": "Write docs", "completed": true })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let task = json_body(&body);
    assert_eq!(task["title"], "Write docs");
    assert_eq!(task["completed"], false);
    assert_eq!(task["parent_id"], Value::Null);
    assert!(!task["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_payload_is_bad_request() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::POST, "/tasks", Some(json!({ "title": 42 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_self_parent_is_bad_request() {
    let app = create_test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/tasks",
        Some(json!({ "id": "t1", "title": "Loop", "parent_id": "t1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_task_is_not_found() {
    let app = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/tasks/missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["code"], "TASK_NOT_FOUND");
}

#[tokio::test]
async fn test_update_requires_both_fields() {
    let app = create_test_app().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/tasks/any",
        Some(json!({ "title": "Only title" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_unknown_ids_succeed() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/tasks/ghost",
        Some(json!({ "title": "Ghost", "completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Task updated successfully");

    let (status, _) = send(&app, Method::DELETE, "/tasks/ghost", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_parent_child_lifecycle() {
    let app = create_test_app().await;

    let (_, body) = send(&app, Method::POST, "/tasks", Some(json!({ "title": "A" }))).await;
    let a_id = json_body(&body)["id"].as_str().unwrap().to_string();

    let (_, body) = send(
        &app,
        Method::POST,
        "/tasks",
        Some(json!({ "title": "B", "parent_id": a_id })),
    )
    .await;
    let b_id = json_body(&body)["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, &format!("/tasks/{b_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["parent_id"], json!(a_id));

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/tasks/{b_id}"),
        Some(json!({ "title": "B (done)", "completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, &format!("/tasks/{b_id}"), None).await;
    assert_eq!(json_body(&body)["completed"], true);

    let (status, _) = send(&app, Method::DELETE, &format!("/tasks/{a_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/tasks/{b_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/tasks", None).await;
    assert_eq!(json_body(&body), json!([]));
}
