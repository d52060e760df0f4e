//! Event image entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::EventImage;
use sqlx::FromRow;

/// Database row mapping for the event_images table.
#[derive(Debug, Clone, FromRow)]
pub struct EventImageEntity {
    pub id: i64,
    pub event_id: i64,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<EventImageEntity> for EventImage {
    fn from(entity: EventImageEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            image_url: entity.image_url,
            alt_text: entity.alt_text,
            is_featured: entity.is_featured,
            display_order: entity.display_order,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_image_entity_to_domain() {
        let entity = EventImageEntity {
            id: 5,
            event_id: 7,
            image_url: "https://cdn.example.org/hall.jpg".to_string(),
            alt_text: None,
            is_featured: false,
            display_order: 2,
            created_at: Utc::now(),
        };
        let image: EventImage = entity.clone().into();
        assert_eq!(image.id, entity.id);
        assert_eq!(image.event_id, entity.event_id);
        assert_eq!(image.display_order, 2);
        assert!(!image.is_featured);
    }
}
