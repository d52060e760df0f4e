//! Event category repository.

use domain::models::EventCategory;
use sqlx::PgPool;

use crate::entities::EventCategoryEntity;

/// Repository for event category reads. Categories are shared references;
/// no create or delete operations are exposed.
#[derive(Clone)]
pub struct EventCategoryRepository {
    pool: PgPool,
}

impl EventCategoryRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by name.
    pub async fn list(&self) -> Result<Vec<EventCategory>, sqlx::Error> {
        let entities = sqlx::query_as::<_, EventCategoryEntity>(
            r#"
            SELECT id, name, slug, description, created_at
            FROM event_categories
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(EventCategory::from).collect())
    }
}
