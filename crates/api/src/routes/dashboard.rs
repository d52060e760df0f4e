//! Admin dashboard endpoint handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use persistence::repositories::{DashboardRepository, DEFAULT_RECENT_EVENTS};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{DashboardStats, RecentEvent};

/// Upper bound on the recent-events list size.
const MAX_RECENT_EVENTS: i64 = 50;

/// Query parameters for the recent-events list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEventsQuery {
    pub limit: Option<i64>,
}

/// Response for the recent-events list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEventsResponse {
    pub events: Vec<RecentEvent>,
}

/// Headline counts for the admin dashboard.
///
/// GET /api/v1/admin/dashboard/stats
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    let dashboard_repo = DashboardRepository::new(state.pool.clone());
    let stats = dashboard_repo.stats().await?;

    Ok(Json(stats))
}

/// Latest events by creation time.
///
/// GET /api/v1/admin/dashboard/recent-events?limit=5
pub async fn get_recent_events(
    State(state): State<AppState>,
    Query(query): Query<RecentEventsQuery>,
) -> Result<Json<RecentEventsResponse>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_EVENTS)
        .clamp(1, MAX_RECENT_EVENTS);

    let dashboard_repo = DashboardRepository::new(state.pool.clone());
    let events = dashboard_repo.recent_events(limit).await?;

    Ok(Json(RecentEventsResponse { events }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_events_limit_clamped() {
        let limit: Option<i64> = Some(500);
        assert_eq!(
            limit.unwrap_or(DEFAULT_RECENT_EVENTS).clamp(1, MAX_RECENT_EVENTS),
            MAX_RECENT_EVENTS
        );

        let limit: Option<i64> = None;
        assert_eq!(
            limit.unwrap_or(DEFAULT_RECENT_EVENTS).clamp(1, MAX_RECENT_EVENTS),
            DEFAULT_RECENT_EVENTS
        );
    }
}
