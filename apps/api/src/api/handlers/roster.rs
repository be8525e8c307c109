use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::middleware::RosterJson;
use crate::api::AppState;
use crate::domain::errors::RosterError;
use crate::domain::teammate::{RosterFilter, Teammate, TeammateFields};

pub const REMOVED_MESSAGE: &str = "Successfully removed the member from the roster.";

/// Teammate as returned by the API
#[derive(Debug, Serialize)]
pub struct TeammateResponse {
    pub id: i64,
    pub name: String,
    pub jersey: Option<i64>,
}

impl From<&Teammate> for TeammateResponse {
    fn from(teammate: &Teammate) -> Self {
        Self {
            id: teammate.id().value(),
            name: teammate.name().to_string(),
            jersey: teammate.jersey(),
        }
    }
}

/// Confirmation body for operations without a resource to return
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List the roster, optionally filtered by `name` and/or `jersey`
///
/// GET /api/roster
pub async fn get_full_roster(
    State(state): State<AppState>,
    filter: Result<Query<RosterFilter>, QueryRejection>,
) -> Result<Json<Vec<TeammateResponse>>, ApiError> {
    let Query(filter) =
        filter.map_err(|rejection| RosterError::validation(rejection.body_text()))?;
    let teammates = state.roster.search_roster(&filter).await?;

    Ok(Json(teammates.iter().map(TeammateResponse::from).collect()))
}

/// Get a teammate by ID
///
/// GET /api/roster/:id
pub async fn get_teammate_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeammateResponse>, ApiError> {
    let teammate = state.roster.get_teammate_info(&id).await?;

    Ok(Json(TeammateResponse::from(&teammate)))
}

/// Add a teammate
///
/// POST /api/roster
pub async fn add_new_teammate(
    State(state): State<AppState>,
    RosterJson(fields): RosterJson<TeammateFields>,
) -> Result<(StatusCode, Json<TeammateResponse>), ApiError> {
    let teammate = state.roster.add_new_teammate(fields).await?;

    Ok((StatusCode::CREATED, Json(TeammateResponse::from(&teammate))))
}

/// Partially update a teammate
///
/// PUT /api/roster/:id
pub async fn update_teammate_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RosterJson(fields): RosterJson<TeammateFields>,
) -> Result<Json<TeammateResponse>, ApiError> {
    let teammate = state.roster.update_teammate_info(&id, fields).await?;

    Ok(Json(TeammateResponse::from(&teammate)))
}

/// Remove a teammate
///
/// DELETE /api/roster/:id
pub async fn remove_teammate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.roster.remove_teammate(&id).await?;

    Ok(Json(MessageResponse {
        message: REMOVED_MESSAGE.to_string(),
    }))
}
