use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::api::errors::ApiError;

/// Turns a panicking handler into the generic 500 response
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = detail, "Request handler panicked");
    ApiError::internal_server_error().into_response()
}
