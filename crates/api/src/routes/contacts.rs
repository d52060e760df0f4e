//! Public contact form endpoint handler.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::ContactRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{ContactSubmission, CreateContactRequest};

/// Submit a contact form message.
///
/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactSubmission>), ApiError> {
    request.validate()?;

    let contact_repo = ContactRepository::new(state.pool.clone());
    let submission = contact_repo.create(&request).await?;

    info!(contact_id = submission.id, "Contact submission received");

    Ok((StatusCode::CREATED, Json(submission)))
}
