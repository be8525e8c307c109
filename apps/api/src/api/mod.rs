// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::service::RosterService;
use errors::{ApiError, NOT_FOUND_MESSAGE};
use handlers::{health, roster};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterService>,
}

impl AppState {
    pub fn new(roster: RosterService) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }
}

/// Builds the full HTTP application
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/roster",
            get(roster::get_full_roster).post(roster::add_new_teammate),
        )
        .route(
            "/api/roster/:id",
            get(roster::get_teammate_info)
                .put(roster::update_teammate_info)
                .delete(roster::remove_teammate),
        )
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found(NOT_FOUND_MESSAGE)
}
