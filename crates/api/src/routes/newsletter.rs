//! Public newsletter endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::NewsletterRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{NewsletterSubscriber, SubscribeRequest, UnsubscribeRequest};

/// Subscribe to the newsletter.
///
/// POST /api/v1/newsletter/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<(StatusCode, Json<NewsletterSubscriber>), ApiError> {
    request.validate()?;

    let newsletter_repo = NewsletterRepository::new(state.pool.clone());
    if newsletter_repo.find_by_email(&request.email).await?.is_some() {
        return Err(ApiError::Conflict("Email is already subscribed".to_string()));
    }

    // Unique constraint backstops the check above under concurrent signups.
    let subscriber = newsletter_repo.subscribe(&request).await.map_err(|e| {
        match ApiError::from(e) {
            ApiError::Conflict(_) => {
                ApiError::Conflict("Email is already subscribed".to_string())
            }
            other => other,
        }
    })?;

    info!(subscriber_id = subscriber.id, "Newsletter subscription created");

    Ok((StatusCode::CREATED, Json(subscriber)))
}

/// Unsubscribe from the newsletter.
///
/// POST /api/v1/newsletter/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(request): Json<UnsubscribeRequest>,
) -> Result<Json<NewsletterSubscriber>, ApiError> {
    request.validate()?;

    let newsletter_repo = NewsletterRepository::new(state.pool.clone());
    let subscriber = newsletter_repo
        .unsubscribe(&request.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subscriber not found".to_string()))?;

    info!(subscriber_id = subscriber.id, "Newsletter unsubscribed");

    Ok(Json(subscriber))
}
