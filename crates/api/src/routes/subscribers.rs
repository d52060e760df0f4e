//! Admin newsletter subscriber endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::NewsletterRepository;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{NewsletterSubscriber, UpdateSubscriberRequest};

/// Query parameters for listing subscribers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscribersQuery {
    /// When true, restrict the listing to active subscribers.
    pub active: Option<bool>,
}

/// Response for listing subscribers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscribersResponse {
    pub subscribers: Vec<NewsletterSubscriber>,
    pub total: usize,
}

/// List newsletter subscribers, newest first.
///
/// GET /api/v1/admin/subscribers?active=true
pub async fn list_subscribers(
    State(state): State<AppState>,
    Query(query): Query<ListSubscribersQuery>,
) -> Result<Json<ListSubscribersResponse>, ApiError> {
    let newsletter_repo = NewsletterRepository::new(state.pool.clone());
    let subscribers = if query.active == Some(true) {
        newsletter_repo.list_active().await?
    } else {
        newsletter_repo.list().await?
    };
    let total = subscribers.len();

    Ok(Json(ListSubscribersResponse { subscribers, total }))
}

/// Update a subscriber's details. Absent fields are left untouched.
///
/// PATCH /api/v1/admin/subscribers/:email
pub async fn update_subscriber(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(request): Json<UpdateSubscriberRequest>,
) -> Result<Json<NewsletterSubscriber>, ApiError> {
    request.validate()?;

    let newsletter_repo = NewsletterRepository::new(state.pool.clone());
    let subscriber = newsletter_repo
        .update(&email, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subscriber not found".to_string()))?;

    info!(subscriber_id = subscriber.id, "Subscriber updated");

    Ok(Json(subscriber))
}

/// Remove a subscriber row entirely.
///
/// DELETE /api/v1/admin/subscribers/:email
pub async fn delete_subscriber(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<StatusCode, ApiError> {
    let newsletter_repo = NewsletterRepository::new(state.pool.clone());
    let deleted = newsletter_repo.delete(&email).await?;

    if !deleted {
        return Err(ApiError::NotFound("Subscriber not found".to_string()));
    }

    info!(email = %email, "Subscriber deleted");

    Ok(StatusCode::NO_CONTENT)
}
