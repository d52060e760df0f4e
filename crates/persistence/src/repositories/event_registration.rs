//! Event registration repository.

use domain::models::{EventRegistration, RegisterForEventRequest};
use sqlx::PgPool;

use crate::entities::EventRegistrationEntity;

/// Repository for event registrations. Registrations are append-only: rows
/// are only ever inserted, and disappear when their event is deleted.
#[derive(Clone)]
pub struct EventRegistrationRepository {
    pool: PgPool,
}

impl EventRegistrationRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a registration for an event.
    pub async fn insert(
        &self,
        event_id: i64,
        request: &RegisterForEventRequest,
    ) -> Result<EventRegistration, sqlx::Error> {
        let entity = sqlx::query_as::<_, EventRegistrationEntity>(
            r#"
            INSERT INTO event_registrations (event_id, name, email, phone, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_id, name, email, phone, notes, created_at
            "#,
        )
        .bind(event_id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// List registrations for an event, newest first.
    pub async fn list_for_event(
        &self,
        event_id: i64,
    ) -> Result<Vec<EventRegistration>, sqlx::Error> {
        let entities = sqlx::query_as::<_, EventRegistrationEntity>(
            r#"
            SELECT id, event_id, name, email, phone, notes, created_at
            FROM event_registrations
            WHERE event_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(EventRegistration::from).collect())
    }
}
