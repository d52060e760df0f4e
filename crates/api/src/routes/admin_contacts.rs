//! Admin contact submission endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::ContactRepository;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{ContactStatus, ContactSubmission, UpdateContactStatusRequest};

/// Query parameters for listing contact submissions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContactsQuery {
    pub status: Option<ContactStatus>,
}

/// Response for listing contact submissions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContactsResponse {
    pub contacts: Vec<ContactSubmission>,
    pub total: usize,
}

/// List contact submissions, optionally filtered by read state,
/// oldest first.
///
/// GET /api/v1/admin/contacts?status=unread
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ListContactsQuery>,
) -> Result<Json<ListContactsResponse>, ApiError> {
    let contact_repo = ContactRepository::new(state.pool.clone());
    let contacts = contact_repo.list(query.status).await?;
    let total = contacts.len();

    Ok(Json(ListContactsResponse { contacts, total }))
}

/// Get a single contact submission.
///
/// GET /api/v1/admin/contacts/:contact_id
pub async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> Result<Json<ContactSubmission>, ApiError> {
    let contact_repo = ContactRepository::new(state.pool.clone());
    let submission = contact_repo
        .find_by_id(contact_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Contact submission not found".to_string()))?;

    Ok(Json(submission))
}

/// Update a contact submission's read state.
///
/// PATCH /api/v1/admin/contacts/:contact_id/status
pub async fn update_contact_status(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
    Json(request): Json<UpdateContactStatusRequest>,
) -> Result<Json<ContactSubmission>, ApiError> {
    let contact_repo = ContactRepository::new(state.pool.clone());
    let submission = contact_repo
        .update_status(contact_id, request.status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Contact submission not found".to_string()))?;

    info!(
        contact_id = submission.id,
        status = submission.status.as_str(),
        "Contact submission status updated"
    );

    Ok(Json(submission))
}

/// Delete a contact submission.
///
/// DELETE /api/v1/admin/contacts/:contact_id
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let contact_repo = ContactRepository::new(state.pool.clone());
    let deleted = contact_repo.delete(contact_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(
            "Contact submission not found".to_string(),
        ));
    }

    info!(contact_id = contact_id, "Contact submission deleted");

    Ok(StatusCode::NO_CONTENT)
}
