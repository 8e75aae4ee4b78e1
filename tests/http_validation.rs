//! Boundary behavior of the HTTP surface that must hold before any store
//! access: validation rejections, routing, and the JSON error shapes. The
//! router is built over a lazily-connected pool that never dials out, so a
//! passing 400 here also proves the handler rejected the request without
//! touching the database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use slotpick_api::config::DatabaseConfig;
use slotpick_api::database::Database;
use slotpick_api::handlers::{router, AppState};

fn test_app() -> Router {
    // Never connected: every test below must resolve before first query.
    let config = DatabaseConfig {
        url: None,
        host: Some("127.0.0.1".to_string()),
        port: Some(5432),
        user: Some("slotpick".to_string()),
        password: Some("slotpick".to_string()),
        name: Some("slotpick_test".to_string()),
        max_connections: 1,
        connect_timeout_secs: 1,
    };
    let database = Database::connect_lazy(&config).expect("lazy pool");
    router(AppState {
        pool: database.pool().clone(),
    })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "example.com")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("host", "example.com")
        .body(Body::empty())
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn create_event_rejects_empty_payload() {
    let response = test_app()
        .oneshot(json_request("POST", "/events", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "All fields are required to create an event.");
    let details = body["details"].as_array().unwrap();
    assert!(details.contains(&json!("event_name is required")));
    assert!(details.contains(&json!("time_slots is required")));
}

#[tokio::test]
async fn create_event_rejects_reversed_slot_interval() {
    let payload = json!({
        "event_name": "Standup",
        "description": "daily",
        "organizer_name": "Ann",
        "organizer_email": "ann@x.com",
        "time_slots": [
            { "start_time": "2025-01-16T11:00:00Z", "end_time": "2025-01-16T10:00:00Z" }
        ],
    });
    let response = test_app()
        .oneshot(json_request("POST", "/events", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["details"][0],
        "time_slots[0].start_time must be earlier than end_time"
    );
}

#[tokio::test]
async fn create_event_rejects_empty_slot_list() {
    let payload = json!({
        "event_name": "Standup",
        "description": "daily",
        "organizer_name": "Ann",
        "organizer_email": "ann@x.com",
        "time_slots": [],
    });
    let response = test_app()
        .oneshot(json_request("POST", "/events", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_event_rejects_missing_fields() {
    let response = test_app()
        .oneshot(json_request("PUT", "/events/9", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "All fields needed to update the event.");
}

#[tokio::test]
async fn update_event_rejects_non_numeric_id() {
    let payload = json!({
        "event_name": "Standup",
        "description": "daily",
        "time_slots": [
            { "start_time": "2025-01-16T10:00:00Z", "end_time": "2025-01-16T11:00:00Z" }
        ],
    });
    let response = test_app()
        .oneshot(json_request("PUT", "/events/not-a-number", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_time_slot_rejects_missing_fields() {
    let response = test_app()
        .oneshot(json_request("POST", "/time_slots", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "All fields required");
}

#[tokio::test]
async fn create_attendee_rejects_missing_email() {
    let payload = json!({ "event_id": 1, "name": "John" });
    let response = test_app()
        .oneshot(json_request("POST", "/attendees", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Event ID, name, and email are all required");
}

#[tokio::test]
async fn submission_with_empty_slot_list_is_rejected_without_store_access() {
    // The lazy pool has no live connection: a 400 here means the handler
    // never attempted the attendee insert.
    let payload = json!({
        "name": "John",
        "email": "john@x.com",
        "event_id": 1,
        "timeSlots": [],
    });
    let response = test_app()
        .oneshot(json_request("POST", "/availability_responses", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn submission_rejects_empty_payload() {
    let response = test_app()
        .oneshot(json_request("POST", "/availability_responses", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn update_response_rejects_missing_fields() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/availability_responses/1",
            json!({ "availability": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unmatched_route_returns_json_404() {
    let response = test_app().oneshot(get_request("/nope/nothing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Route not found.");
}

#[tokio::test]
async fn root_banner_names_the_service() {
    let response = test_app().oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Slotpick API");
    assert!(body["endpoints"]["events"].is_string());
}
