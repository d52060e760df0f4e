//! Event entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{Event, EventImage, EventStatus, RecentEvent};
use sqlx::FromRow;

/// Database row mapping for events joined with their category name.
///
/// The category comes from a left join, so `category_name` is null for
/// uncategorized events rather than the row being dropped.
#[derive(Debug, Clone, FromRow)]
pub struct EventWithCategoryEntity {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: Option<String>,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub seo_metadata: Option<serde_json::Value>,
}

impl EventWithCategoryEntity {
    /// Converts to the domain model with its ordered image set attached.
    pub fn into_event(self, images: Vec<EventImage>) -> Event {
        Event {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            content: self.content,
            location: self.location,
            event_date: self.event_date,
            event_end_date: self.event_end_date,
            image_url: self.image_url,
            category_id: self.category_id,
            category_name: self.category_name,
            status: EventStatus::from_str(&self.status).unwrap_or(EventStatus::Draft),
            is_featured: self.is_featured,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
            seo_metadata: self.seo_metadata,
            images,
        }
    }
}

/// Compact row for the dashboard's recent-events list.
#[derive(Debug, Clone, FromRow)]
pub struct RecentEventEntity {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub event_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub category_name: Option<String>,
}

impl From<RecentEventEntity> for RecentEvent {
    fn from(entity: RecentEventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            status: EventStatus::from_str(&entity.status).unwrap_or(EventStatus::Draft),
            event_date: entity.event_date,
            image_url: entity.image_url,
            category_name: entity.category_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entity() -> EventWithCategoryEntity {
        EventWithCategoryEntity {
            id: 7,
            title: "River Cleanup".to_string(),
            slug: "river-cleanup".to_string(),
            description: "Join us for the annual river cleanup.".to_string(),
            content: None,
            location: "North Bank".to_string(),
            event_date: Utc::now(),
            event_end_date: None,
            image_url: Some("https://cdn.example.org/river.jpg".to_string()),
            category_id: Some(2),
            category_name: Some("Volunteering".to_string()),
            status: "published".to_string(),
            is_featured: true,
            created_by: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            seo_metadata: None,
        }
    }

    #[test]
    fn test_into_event_maps_fields() {
        let entity = create_test_entity();
        let event = entity.clone().into_event(Vec::new());

        assert_eq!(event.id, entity.id);
        assert_eq!(event.slug, entity.slug);
        assert_eq!(event.status, EventStatus::Published);
        assert_eq!(event.category_name.as_deref(), Some("Volunteering"));
        assert!(event.images.is_empty());
    }

    #[test]
    fn test_into_event_unknown_status_falls_back_to_draft() {
        let mut entity = create_test_entity();
        entity.status = "archived".to_string();
        let event = entity.into_event(Vec::new());
        assert_eq!(event.status, EventStatus::Draft);
    }

    #[test]
    fn test_into_event_without_category() {
        let mut entity = create_test_entity();
        entity.category_id = None;
        entity.category_name = None;
        let event = entity.into_event(Vec::new());
        assert!(event.category_id.is_none());
        assert!(event.category_name.is_none());
    }

    #[test]
    fn test_recent_event_entity_to_domain() {
        let entity = RecentEventEntity {
            id: 3,
            title: "Harvest Dinner".to_string(),
            slug: "harvest-dinner".to_string(),
            status: "draft".to_string(),
            event_date: Utc::now(),
            image_url: None,
            category_name: Some("Fundraising".to_string()),
        };
        let recent: RecentEvent = entity.into();
        assert_eq!(recent.id, 3);
        assert_eq!(recent.status, EventStatus::Draft);
        assert_eq!(recent.category_name.as_deref(), Some("Fundraising"));
    }
}
