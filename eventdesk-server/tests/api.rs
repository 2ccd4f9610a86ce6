//! End-to-end tests of the HTTP surface against an in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use eventdesk_core::store::{EventStore, MemoryStore};
use eventdesk_core::{Event, EventError, EventFields, EventResult};
use eventdesk_server::{app, state::AppState};

fn test_app() -> Router {
    app(AppState::new(Arc::new(MemoryStore::new())))
}

fn launch() -> Value {
    json!({
        "title": "Launch",
        "description": "Product launch",
        "date": "2025-06-01",
        "time": "10:00",
        "location": "HQ",
        "organizer": "Alice",
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn create(app: &Router, body: Value) -> String {
    let (status, created) = send(app, Method::POST, "/api/events", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn root_returns_liveness_string() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Event Management System API is running");
}

#[tokio::test]
async fn launch_scenario() {
    let app = test_app();

    let (status, created) = send(&app, Method::POST, "/api/events", Some(launch())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let mut expected = launch();
    expected["id"] = json!(id);
    assert_eq!(created, expected);

    let (status, fetched) = send(&app, Method::GET, &format!("/api/events/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, expected);

    let mut changed = launch();
    changed["location"] = json!("Remote");
    let (status, updated) =
        send(&app, Method::PUT, &format!("/api/events/{id}"), Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["location"], "Remote");
    assert_eq!(updated["id"], json!(id));

    let (status, body) = send(&app, Method::DELETE, &format!("/api/events/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Event deleted successfully" }));

    let (status, body) = send(&app, Method::GET, &format!("/api/events/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id));
}

#[tokio::test]
async fn list_reflects_creates_and_deletes() {
    let app = test_app();

    let mut ids = Vec::new();
    for i in 0..4 {
        let mut body = launch();
        body["title"] = json!(format!("Event {i}"));
        ids.push(create(&app, body).await);
    }
    send(&app, Method::DELETE, &format!("/api/events/{}", ids[0]), None).await;

    let (status, listed) = send(&app, Method::GET, "/api/events", None).await;
    assert_eq!(status, StatusCode::OK);

    let listed_ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(listed_ids, ids[1..].iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn create_with_missing_field_is_rejected_and_persists_nothing() {
    let app = test_app();

    let mut body = launch();
    body.as_object_mut().unwrap().remove("organizer");
    body["title"] = json!("");

    let (status, error) = send(&app, Method::POST, "/api/events", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["error"],
        "Missing or empty required fields: title, organizer"
    );

    let (_, listed) = send(&app, Method::GET, "/api/events", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let app = test_app();

    let mut body = launch();
    body["id"] = json!("chosen-by-client");
    let id = create(&app, body).await;

    assert_ne!(id, "chosen-by-client");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_validates_and_requires_existing_event() {
    let app = test_app();
    let id = create(&app, launch()).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/events/{id}"),
        Some(json!({ "title": "Only a title" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, unchanged) = send(&app, Method::GET, &format!("/api/events/{id}"), None).await;
    assert_eq!(unchanged["title"], "Launch");

    let missing = "00000000-0000-4000-8000-000000000000";
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/events/{missing}"),
        Some(launch()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_missing_event_is_not_found() {
    let app = test_app();
    let id = create(&app, launch()).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/events/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/events/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = test_app();

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/api/events/not-an-id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid event id: not-an-id");
    }
}

#[tokio::test]
async fn timestamp_dates_are_normalized() {
    let app = test_app();

    let mut body = launch();
    body["date"] = json!("2025-06-01T00:00:00.000Z");
    let (_, created) = send(&app, Method::POST, "/api/events", Some(body)).await;

    assert_eq!(created["date"], "2025-06-01");
}

#[tokio::test]
async fn sequential_updates_are_last_write_wins() {
    let app = test_app();
    let id = create(&app, launch()).await;
    let uri = format!("/api/events/{id}");

    for location in ["Room A", "Room B"] {
        let mut body = launch();
        body["location"] = json!(location);
        send(&app, Method::PUT, &uri, Some(body)).await;
    }

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched["location"], "Room B");
}

/// Store whose backing database is gone.
struct UnavailableStore;

#[async_trait]
impl EventStore for UnavailableStore {
    async fn list(&self) -> EventResult<Vec<Event>> {
        Err(EventError::Storage("connection refused".into()))
    }

    async fn get(&self, _id: &str) -> EventResult<Event> {
        Err(EventError::Storage("connection refused".into()))
    }

    async fn create(&self, _fields: EventFields) -> EventResult<Event> {
        Err(EventError::Storage("connection refused".into()))
    }

    async fn update(&self, _id: &str, _fields: EventFields) -> EventResult<Event> {
        Err(EventError::Storage("connection refused".into()))
    }

    async fn delete(&self, _id: &str) -> EventResult<()> {
        Err(EventError::Storage("connection refused".into()))
    }
}

#[tokio::test]
async fn storage_failures_are_internal_errors() {
    let app = app(AppState::new(Arc::new(UnavailableStore)));

    let (status, body) = send(&app, Method::GET, "/api/events", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Storage unavailable: connection refused");

    let (status, _) = send(&app, Method::POST, "/api/events", Some(launch())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
