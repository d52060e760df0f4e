//! Event registration entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::EventRegistration;
use sqlx::FromRow;

/// Database row mapping for the event_registrations table.
#[derive(Debug, Clone, FromRow)]
pub struct EventRegistrationEntity {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<EventRegistrationEntity> for EventRegistration {
    fn from(entity: EventRegistrationEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }
}
