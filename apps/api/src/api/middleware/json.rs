use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::api::errors::ApiError;
use crate::domain::errors::RosterError;

/// JSON body extractor whose rejections use the roster error shape
///
/// Malformed JSON, wrong field types, unknown fields and a missing
/// `Content-Type: application/json` header all become a 400 validation error.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(RosterJson(fields): RosterJson<TeammateFields>) { /* ... */ }
/// ```
pub struct RosterJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RosterJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| RosterError::validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}
