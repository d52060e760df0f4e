//! Event category entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::EventCategory;
use sqlx::FromRow;

/// Database row mapping for the event_categories table.
#[derive(Debug, Clone, FromRow)]
pub struct EventCategoryEntity {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<EventCategoryEntity> for EventCategory {
    fn from(entity: EventCategoryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}
