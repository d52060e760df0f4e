//! Admin event endpoint handlers.
//!
//! Caller identity is established upstream; these handlers assume an
//! authenticated admin.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{EventRegistrationRepository, EventRepository};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{EventInput, EventRegistration, EventResponse};

/// Response for listing an event's registrations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRegistrationsResponse {
    pub registrations: Vec<EventRegistration>,
    pub total: usize,
}

/// Create a new event.
///
/// POST /api/v1/admin/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    input.validate()?;

    let event_repo = EventRepository::new(state.pool.clone());
    let event = event_repo.create(&input, None).await.map_err(|e| {
        match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::Conflict("Slug already exists".to_string()),
            ApiError::NotFound(_) => ApiError::NotFound("Category not found".to_string()),
            other => other,
        }
    })?;

    info!(event_id = event.id, slug = %event.slug, "Event created");

    Ok((StatusCode::CREATED, Json(event.into())))
}

/// Update an event, replacing all mutable fields. Supplying `images`
/// replaces the stored image set wholesale.
///
/// PUT /api/v1/admin/events/:event_id
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(input): Json<EventInput>,
) -> Result<Json<EventResponse>, ApiError> {
    input.validate()?;

    let event_repo = EventRepository::new(state.pool.clone());
    let event = event_repo
        .update(event_id, &input)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::Conflict("Slug already exists".to_string()),
            ApiError::NotFound(_) => ApiError::NotFound("Category not found".to_string()),
            other => other,
        })?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    info!(event_id = event.id, slug = %event.slug, "Event updated");

    Ok(Json(event.into()))
}

/// Delete an event. Images and registrations are removed with it.
///
/// DELETE /api/v1/admin/events/:event_id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let event_repo = EventRepository::new(state.pool.clone());
    let deleted = event_repo.delete(event_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    info!(event_id = event_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// List registrations for an event, newest first.
///
/// GET /api/v1/admin/events/:event_id/registrations
pub async fn list_registrations(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<ListRegistrationsResponse>, ApiError> {
    let event_repo = EventRepository::new(state.pool.clone());
    event_repo
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let registration_repo = EventRegistrationRepository::new(state.pool.clone());
    let registrations = registration_repo.list_for_event(event_id).await?;
    let total = registrations.len();

    Ok(Json(ListRegistrationsResponse {
        registrations,
        total,
    }))
}
