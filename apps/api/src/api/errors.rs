use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::RosterError;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// API error type with HTTP status code and message
///
/// Renders as `{ "error": { "message": ... } }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error with the generic message
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": { "message": self.message }
        }));

        (self.status, body).into_response()
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match &err {
            RosterError::EmptyRoster | RosterError::NotFound(_) | RosterError::NoMatches => {
                Self::not_found(err.to_string())
            }
            RosterError::Validation(_) | RosterError::InvalidIdentifier(_) => {
                tracing::warn!(error = %err, "Rejected roster request");
                Self::bad_request(err.to_string())
            }
            RosterError::Internal(source) => {
                tracing::error!(error = %source, "Roster operation failed");
                Self::internal_server_error()
            }
        }
    }
}
