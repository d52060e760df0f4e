//! Dashboard repository: headline counts and the recent-events list.

use domain::models::{DashboardStats, EventFilter, EventStatus, RecentEvent};
use sqlx::PgPool;

use crate::entities::RecentEventEntity;
use crate::repositories::EventRepository;

/// Default size of the recent-events list.
pub const DEFAULT_RECENT_EVENTS: i64 = 5;

/// Repository for the admin dashboard.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Headline counts. Event counts go through the event filter so the
    /// predicates match the listing queries exactly.
    pub async fn stats(&self) -> Result<DashboardStats, sqlx::Error> {
        let events = EventRepository::new(self.pool.clone());

        let total_events = events.count(&EventFilter::default()).await?;
        let upcoming_events = events
            .count(&EventFilter {
                upcoming: Some(true),
                ..Default::default()
            })
            .await?;
        let published_events = events
            .count(&EventFilter {
                status: Some(EventStatus::Published),
                ..Default::default()
            })
            .await?;
        let featured_events = events
            .count(&EventFilter {
                featured: Some(true),
                ..Default::default()
            })
            .await?;

        let active_subscribers: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM newsletter_subscribers WHERE status = 'active'",
        )
        .fetch_one(&self.pool)
        .await?;

        let unread_contacts: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM contact_submissions WHERE status = 'unread'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardStats {
            total_events,
            upcoming_events,
            published_events,
            featured_events,
            active_subscribers,
            unread_contacts,
        })
    }

    /// Latest events by creation time, with category name resolved.
    pub async fn recent_events(&self, limit: i64) -> Result<Vec<RecentEvent>, sqlx::Error> {
        let entities = sqlx::query_as::<_, RecentEventEntity>(
            r#"
            SELECT e.id, e.title, e.slug, e.status, e.event_date, e.image_url,
                   c.name AS category_name
            FROM events e
            LEFT JOIN event_categories c ON e.category_id = c.id
            ORDER BY e.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(RecentEvent::from).collect())
    }
}
