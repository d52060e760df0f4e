//! Public event endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{EventPage, EventRegistrationRepository, EventRepository};
use shared::pagination::pages_for;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{
    EventRegistration, EventResponse, ListEventsQuery, ListEventsResponse,
    RegisterForEventRequest,
};

/// List events with optional filters and pagination.
///
/// GET /api/v1/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let filter = query.filter();
    let page = EventPage::from_query(query.limit, query.page, query.page_size);

    let event_repo = EventRepository::new(state.pool.clone());
    let (events, total) = event_repo.list(&filter, &page).await?;

    let response = match page {
        EventPage::Limit(n) => ListEventsResponse {
            events,
            total,
            page: 1,
            page_size: n,
            total_pages: pages_for(total, n),
        },
        EventPage::Paged(params) => ListEventsResponse {
            events,
            total,
            page: params.page(),
            page_size: params.page_size(),
            total_pages: params.total_pages(total),
        },
    };

    Ok(Json(response))
}

/// Get a single event by slug.
///
/// GET /api/v1/events/:slug
pub async fn get_event_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let event_repo = EventRepository::new(state.pool.clone());
    let event = event_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(Json(event.into()))
}

/// Register for an event.
///
/// POST /api/v1/events/:event_id/register
pub async fn register_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(request): Json<RegisterForEventRequest>,
) -> Result<(StatusCode, Json<EventRegistration>), ApiError> {
    request.validate()?;

    // Verify the event exists before recording a registration
    let event_repo = EventRepository::new(state.pool.clone());
    event_repo
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let registration_repo = EventRegistrationRepository::new(state.pool.clone());
    let registration = registration_repo.insert(event_id, &request).await?;

    info!(
        registration_id = registration.id,
        event_id = event_id,
        "Event registration created"
    );

    Ok((StatusCode::CREATED, Json(registration)))
}

#[cfg(test)]
mod tests {
    use shared::pagination::{pages_for, PageParams};

    #[test]
    fn test_limit_response_shape() {
        // Limit listings report a single page capped at the limit.
        assert_eq!(pages_for(7, 3), 3);
        assert_eq!(pages_for(7, 0), 0);
    }

    #[test]
    fn test_paged_response_shape() {
        let params = PageParams::new(Some(2), Some(10));
        assert_eq!(params.page(), 2);
        assert_eq!(params.total_pages(25), 3);
    }
}
