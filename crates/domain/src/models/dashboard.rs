//! Admin dashboard models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event::EventStatus;

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub published_events: i64,
    pub featured_events: i64,
    pub active_subscribers: i64,
    pub unread_contacts: i64,
}

/// Compact event row for the dashboard's recent-events list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEvent {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub status: EventStatus,
    pub event_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub category_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_serialization() {
        let stats = DashboardStats {
            total_events: 12,
            upcoming_events: 4,
            published_events: 9,
            featured_events: 2,
            active_subscribers: 120,
            unread_contacts: 3,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalEvents"], 12);
        assert_eq!(json["upcomingEvents"], 4);
        assert_eq!(json["activeSubscribers"], 120);
        assert_eq!(json["unreadContacts"], 3);
    }
}
