//! End-to-end API integration tests
//!
//! These tests drive the full router (handlers, service, SQLite repository)
//! against an in-memory database and check status codes and JSON bodies.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{send, setup_app};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_empty_roster_returns_404() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api/roster", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&body),
        "The roster is currently empty. Add some teammates."
    );
}

#[tokio::test]
async fn test_create_get_delete_scenario() {
    let (app, _pool) = setup_app().await;

    // Step 1: Add a teammate
    let (status, body) = send(
        &app,
        "POST",
        "/api/roster",
        Some(json!({ "name": "Alex", "jersey": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "name": "Alex", "jersey": 7 }));

    // Step 2: Fetch it back
    let (status, body) = send(&app, "GET", "/api/roster/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Alex", "jersey": 7 }));

    // Step 3: Remove it
    let (status, body) = send(&app, "DELETE", "/api/roster/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Successfully removed the member from the roster." })
    );

    // Step 4: It is gone
    let (status, body) = send(&app, "GET", "/api/roster/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error_message(&body).contains('1'));
}

#[tokio::test]
async fn test_roster_lists_added_teammates_in_order() {
    let (app, _pool) = setup_app().await;

    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex", "jersey": 7 }))).await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Sam" }))).await;

    let (status, body) = send(&app, "GET", "/api/roster", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Alex", "jersey": 7 },
            { "id": 2, "name": "Sam", "jersey": null }
        ])
    );
}

#[tokio::test]
async fn test_get_unknown_teammate_returns_404_with_id() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api/roster/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&body),
        "Unable to find the teammate with the ID of 42"
    );
}

#[tokio::test]
async fn test_get_malformed_id_returns_404() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api/roster/abc", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error_message(&body).contains("abc"));
}

#[tokio::test]
async fn test_create_without_name_returns_400() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "POST", "/api/roster", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("name is required"));
}

#[tokio::test]
async fn test_create_with_wrong_types_returns_400() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/roster",
        Some(json!({ "name": "Alex", "jersey": "seven" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("The provided request was invalid"));
}

#[tokio::test]
async fn test_create_with_unknown_field_returns_400() {
    let (app, _pool) = setup_app().await;

    let (status, _body) = send(
        &app,
        "POST",
        "/api/roster",
        Some(json!({ "name": "Alex", "position": "keeper" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_400() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/roster")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"]["message"].is_string());
}

#[tokio::test]
async fn test_create_without_content_type_returns_400() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/roster")
                .body(Body::from(r#"{"name":"Alex"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_name_keeps_other_fields() {
    let (app, _pool) = setup_app().await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex", "jersey": 7 }))).await;

    let (status, body) = send(&app, "PUT", "/api/roster/1", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "X", "jersey": 7 }));

    let (status, body) = send(&app, "GET", "/api/roster/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "X", "jersey": 7 }));
}

#[tokio::test]
async fn test_update_unknown_teammate_returns_404() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "PUT", "/api/roster/9", Some(json!({ "jersey": 4 }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error_message(&body).contains('9'));
}

#[tokio::test]
async fn test_update_with_empty_body_returns_400() {
    let (app, _pool) = setup_app().await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex" }))).await;

    let (status, body) = send(&app, "PUT", "/api/roster/1", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("no fields to update"));
}

#[tokio::test]
async fn test_update_with_blank_name_returns_400() {
    let (app, _pool) = setup_app().await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex" }))).await;

    let (status, _body) = send(&app, "PUT", "/api/roster/1", Some(json!({ "name": "  " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_malformed_id_returns_400() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "PUT", "/api/roster/one", Some(json!({ "name": "X" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("one"));
}

#[tokio::test]
async fn test_delete_malformed_id_returns_400() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "DELETE", "/api/roster/one", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Unable to use the identifier one. The identifier is invalid."
    );
}

#[tokio::test]
async fn test_delete_unknown_id_returns_400() {
    let (app, _pool) = setup_app().await;

    let (status, _body) = send(&app, "DELETE", "/api/roster/5", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filter_roster_by_name_and_jersey() {
    let (app, _pool) = setup_app().await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex", "jersey": 7 }))).await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Sam", "jersey": 7 }))).await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex", "jersey": 11 }))).await;

    let (status, body) = send(&app, "GET", "/api/roster?jersey=7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", "/api/roster?name=Alex&jersey=11", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 3, "name": "Alex", "jersey": 11 }]));

    let (status, body) = send(&app, "GET", "/api/roster?name=Jordan", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "No teammates match the given filter.");
}

#[tokio::test]
async fn test_filter_with_invalid_jersey_returns_400() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api/roster?jersey=seven", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api/add-teammate/alex", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": { "message": "Resource not found." } }));
}

#[tokio::test]
async fn test_api_writes_are_visible_in_database() {
    let (app, pool) = setup_app().await;

    send(&app, "POST", "/api/roster", Some(json!({ "name": "  Alex  ", "jersey": 7 }))).await;

    let (name, jersey): (String, Option<i64>) =
        sqlx::query_as("SELECT name, jersey FROM roster WHERE id = 1")
            .fetch_one(&pool)
            .await
            .expect("Teammate should be stored");

    assert_eq!(name, "  Alex  ");
    assert_eq!(jersey, Some(7));
}

#[tokio::test]
async fn test_name_round_trips_exactly_as_submitted() {
    let (app, _pool) = setup_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/roster",
        Some(json!({ "name": " Alex ", "jersey": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1, "name": " Alex ", "jersey": 7 }));

    let (status, body) = send(&app, "GET", "/api/roster/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_update_with_null_jersey_clears_it() {
    let (app, _pool) = setup_app().await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex", "jersey": 7 }))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/roster/1",
        Some(json!({ "name": "Alex", "jersey": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Alex", "jersey": null }));

    let (status, body) = send(&app, "GET", "/api/roster/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jersey"], Value::Null);
}

#[tokio::test]
async fn test_update_without_jersey_keeps_it() {
    let (app, _pool) = setup_app().await;
    send(&app, "POST", "/api/roster", Some(json!({ "name": "Alex", "jersey": 7 }))).await;

    let (status, body) = send(&app, "PUT", "/api/roster/1", Some(json!({ "name": "Sam" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Sam", "jersey": 7 }));
}
