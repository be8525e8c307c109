//! Shared setup for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use roster_api::api::{self, AppState};
use roster_api::domain::service::RosterService;
use roster_api::infrastructure::database;
use roster_api::infrastructure::repositories::SqliteRosterRepository;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for oneshot

/// Fresh, migrated in-memory database
///
/// A single connection that never expires: every connection to
/// `sqlite::memory:` opens a separate empty database.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    database::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Full application wired to a fresh database
pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = setup_test_db().await;
    let repo = Arc::new(SqliteRosterRepository::new(pool.clone()));
    let app = api::router(AppState::new(RosterService::new(repo)));
    (app, pool)
}

/// Sends one request and returns the status and the body parsed as JSON
/// (`Value::Null` for an empty or non-JSON body)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
