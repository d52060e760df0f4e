//! Event repository: filtered listings, slug lookups, and mutations.

use domain::models::{Event, EventFilter, EventImage, EventInput, SeoMetadata};
use serde_json::Value as JsonValue;
use shared::pagination::PageParams;
use sqlx::{PgPool, Postgres, Transaction};

use crate::entities::{EventImageEntity, EventWithCategoryEntity};

/// Shared SELECT for event rows joined with their category name.
/// A left join keeps uncategorized events with a null category_name.
const EVENT_SELECT: &str = r#"
    SELECT e.id, e.title, e.slug, e.description, e.content, e.location,
           e.event_date, e.event_end_date, e.image_url, e.category_id,
           c.name AS category_name, e.status, e.is_featured, e.created_by,
           e.created_at, e.updated_at, e.seo_metadata
    FROM events e
    LEFT JOIN event_categories c ON e.category_id = c.id
"#;

/// How a listing is bounded: either a hard cap with no offset ("featured N"
/// style queries) or a 1-indexed page/page-size pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPage {
    Limit(i64),
    Paged(PageParams),
}

impl EventPage {
    /// Resolves raw query values. An explicit `limit` takes precedence over
    /// page/pageSize.
    pub fn from_query(limit: Option<i64>, page: Option<i64>, page_size: Option<i64>) -> Self {
        match limit {
            Some(n) => EventPage::Limit(n.max(0)),
            None => EventPage::Paged(PageParams::new(page, page_size)),
        }
    }
}

/// Helper struct for building dynamic WHERE clauses from event filters.
///
/// Predicates are compiled once from the filter into an immutable clause list
/// and shared by the list and count queries, so both always apply identical
/// restrictions. Presence is what matters: `featured = Some(false)` still
/// produces a predicate.
struct EventFilterBuilder {
    conditions: Vec<String>,
    param_count: i32,
}

impl EventFilterBuilder {
    fn build(filter: &EventFilter) -> Self {
        let mut conditions = Vec::new();
        let mut param_count = 0;

        if filter.status.is_some() {
            param_count += 1;
            conditions.push(format!("e.status = ${}", param_count));
        }

        if filter.featured.is_some() {
            param_count += 1;
            conditions.push(format!("e.is_featured = ${}", param_count));
        }

        if filter.category_id.is_some() {
            param_count += 1;
            conditions.push(format!("e.category_id = ${}", param_count));
        }

        // Upcoming/past is a comparison against the clock, not a stored field.
        match filter.upcoming {
            Some(true) => conditions.push("e.event_date >= NOW()".to_string()),
            Some(false) => conditions.push("e.event_date < NOW()".to_string()),
            None => {}
        }

        Self {
            conditions,
            param_count,
        }
    }

    /// Get the WHERE clause as a string.
    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "TRUE".to_string()
        } else {
            self.conditions.join(" AND ")
        }
    }

    /// Get the current parameter count.
    fn param_count(&self) -> i32 {
        self.param_count
    }

    /// Upcoming listings read soonest-first; everything else most-recent-first.
    fn order_clause(upcoming: Option<bool>) -> &'static str {
        if upcoming == Some(true) {
            "e.event_date ASC"
        } else {
            "e.event_date DESC"
        }
    }
}

/// Macro to bind filter parameters to a SQLx builder, in the same order the
/// builder numbered them. Avoids duplicating the optional-bind chain between
/// the list and count queries.
macro_rules! bind_event_filters {
    ($builder:expr, $filter:expr) => {{
        let mut b = $builder;
        if let Some(status) = $filter.status {
            b = b.bind(status.as_str());
        }
        if let Some(featured) = $filter.featured {
            b = b.bind(featured);
        }
        if let Some(category_id) = $filter.category_id {
            b = b.bind(category_id);
        }
        b
    }};
}

/// Repository for event database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List events matching a filter, joined with category name and with each
    /// event's ordered image set attached. Returns the page of events plus the
    /// total count under the same filter.
    pub async fn list(
        &self,
        filter: &EventFilter,
        page: &EventPage,
    ) -> Result<(Vec<Event>, i64), sqlx::Error> {
        let builder = EventFilterBuilder::build(filter);
        let where_clause = builder.where_clause();
        let param_count = builder.param_count();

        let total = self.count(filter).await?;

        let limit_clause = match page {
            EventPage::Limit(_) => format!("LIMIT ${}", param_count + 1),
            EventPage::Paged(_) => {
                format!("LIMIT ${} OFFSET ${}", param_count + 1, param_count + 2)
            }
        };

        let list_query = format!(
            "{} WHERE {} ORDER BY {} {}",
            EVENT_SELECT,
            where_clause,
            EventFilterBuilder::order_clause(filter.upcoming),
            limit_clause
        );

        let list_builder = sqlx::query_as::<_, EventWithCategoryEntity>(&list_query);
        let list_builder = bind_event_filters!(list_builder, filter);
        let entities = match page {
            EventPage::Limit(n) => list_builder.bind(n).fetch_all(&self.pool).await?,
            EventPage::Paged(p) => {
                list_builder
                    .bind(p.page_size())
                    .bind(p.offset())
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        let mut events = Vec::with_capacity(entities.len());
        for entity in entities {
            let images = self.images_for_event(entity.id).await?;
            events.push(entity.into_event(images));
        }

        Ok((events, total))
    }

    /// Count events matching a filter. Applies exactly the predicates `list`
    /// applies, and nothing else.
    pub async fn count(&self, filter: &EventFilter) -> Result<i64, sqlx::Error> {
        let builder = EventFilterBuilder::build(filter);
        let count_query = format!(
            "SELECT COUNT(*) FROM events e WHERE {}",
            builder.where_clause()
        );

        let count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        let count_builder = bind_event_filters!(count_builder, filter);
        count_builder.fetch_one(&self.pool).await
    }

    /// Find an event by slug. Absence is a routine outcome, not an error.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("{} WHERE e.slug = $1", EVENT_SELECT);
        let entity = sqlx::query_as::<_, EventWithCategoryEntity>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        self.attach_images(entity).await
    }

    /// Find an event by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("{} WHERE e.id = $1", EVENT_SELECT);
        let entity = sqlx::query_as::<_, EventWithCategoryEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        self.attach_images(entity).await
    }

    /// Create an event. The event row and its image set (when supplied) are
    /// written in one transaction, so a failed image pass never leaves a
    /// half-created event behind.
    pub async fn create(
        &self,
        input: &EventInput,
        created_by: Option<i64>,
    ) -> Result<Event, sqlx::Error> {
        let seo = SeoMetadata::for_event(&input.title, &input.description);
        let seo_json = serde_json::to_value(&seo).unwrap_or(JsonValue::Null);

        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO events (
                title, slug, description, content, location, event_date,
                event_end_date, category_id, status, is_featured, created_by,
                seo_metadata
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.content)
        .bind(&input.location)
        .bind(input.event_date)
        .bind(input.event_end_date)
        .bind(input.category_id)
        .bind(input.status.as_str())
        .bind(input.is_featured)
        .bind(created_by)
        .bind(seo_json)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(images) = &input.images {
            replace_images(&mut tx, id, images).await?;
        }

        tx.commit().await?;

        // Freshly committed row always resolves.
        self.find_by_id(id).await?.ok_or(sqlx::Error::RowNotFound)
    }

    /// Update an event, replacing all mutable fields. When `images` is
    /// supplied the stored image set is replaced wholesale (delete all, then
    /// reinsert); `images: None` leaves the set and the legacy image_url
    /// untouched. Returns None when the event does not exist.
    pub async fn update(
        &self,
        id: i64,
        input: &EventInput,
    ) -> Result<Option<Event>, sqlx::Error> {
        let seo = SeoMetadata::for_event(&input.title, &input.description);
        let seo_json = serde_json::to_value(&seo).unwrap_or(JsonValue::Null);

        let mut tx = self.pool.begin().await?;

        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE events
            SET title = $2, slug = $3, description = $4, content = $5,
                location = $6, event_date = $7, event_end_date = $8,
                category_id = $9, status = $10, is_featured = $11,
                seo_metadata = $12, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.content)
        .bind(&input.location)
        .bind(input.event_date)
        .bind(input.event_end_date)
        .bind(input.category_id)
        .bind(input.status.as_str())
        .bind(input.is_featured)
        .bind(seo_json)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        if let Some(images) = &input.images {
            replace_images(&mut tx, id, images).await?;
        }

        tx.commit().await?;

        self.find_by_id(id).await
    }

    /// Delete an event. Images and registrations cascade in the store.
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Fetch an event's images, featured image first, then by display order.
    pub async fn images_for_event(&self, event_id: i64) -> Result<Vec<EventImage>, sqlx::Error> {
        let entities = sqlx::query_as::<_, EventImageEntity>(
            r#"
            SELECT id, event_id, image_url, alt_text, is_featured, display_order, created_at
            FROM event_images
            WHERE event_id = $1
            ORDER BY is_featured DESC, display_order ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(EventImage::from).collect())
    }

    async fn attach_images(
        &self,
        entity: Option<EventWithCategoryEntity>,
    ) -> Result<Option<Event>, sqlx::Error> {
        match entity {
            Some(entity) => {
                let images = self.images_for_event(entity.id).await?;
                Ok(Some(entity.into_event(images)))
            }
            None => Ok(None),
        }
    }
}

/// Replace an event's image set: delete all rows, reinsert in input order
/// (first image flagged featured), and mirror the first URL into the legacy
/// events.image_url column. An empty list clears both.
async fn replace_images(
    tx: &mut Transaction<'_, Postgres>,
    event_id: i64,
    image_urls: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM event_images WHERE event_id = $1")
        .bind(event_id)
        .execute(&mut **tx)
        .await?;

    for (index, url) in image_urls.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO event_images (event_id, image_url, is_featured, display_order)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(event_id)
        .bind(url)
        .bind(index == 0)
        .bind(index as i32)
        .execute(&mut **tx)
        .await?;
    }

    sqlx::query("UPDATE events SET image_url = $2 WHERE id = $1")
        .bind(event_id)
        .bind(image_urls.first().map(|s| s.as_str()))
        .execute(&mut **tx)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::EventStatus;

    #[test]
    fn test_empty_filter_has_no_conditions() {
        let builder = EventFilterBuilder::build(&EventFilter::default());
        assert_eq!(builder.where_clause(), "TRUE");
        assert_eq!(builder.param_count(), 0);
    }

    #[test]
    fn test_all_filters_are_conjunctive_and_numbered() {
        let filter = EventFilter {
            status: Some(EventStatus::Published),
            featured: Some(true),
            category_id: Some(4),
            upcoming: Some(true),
        };
        let builder = EventFilterBuilder::build(&filter);
        assert_eq!(
            builder.where_clause(),
            "e.status = $1 AND e.is_featured = $2 AND e.category_id = $3 AND e.event_date >= NOW()"
        );
        assert_eq!(builder.param_count(), 3);
    }

    #[test]
    fn test_featured_false_still_filters() {
        // Presence check, not truthiness: Some(false) must produce a predicate.
        let filter = EventFilter {
            featured: Some(false),
            ..Default::default()
        };
        let builder = EventFilterBuilder::build(&filter);
        assert_eq!(builder.where_clause(), "e.is_featured = $1");
        assert_eq!(builder.param_count(), 1);
    }

    #[test]
    fn test_upcoming_false_filters_past() {
        let filter = EventFilter {
            upcoming: Some(false),
            ..Default::default()
        };
        let builder = EventFilterBuilder::build(&filter);
        assert_eq!(builder.where_clause(), "e.event_date < NOW()");
        assert_eq!(builder.param_count(), 0);
    }

    #[test]
    fn test_param_positions_skip_absent_filters() {
        let filter = EventFilter {
            status: None,
            featured: None,
            category_id: Some(9),
            upcoming: None,
        };
        let builder = EventFilterBuilder::build(&filter);
        assert_eq!(builder.where_clause(), "e.category_id = $1");
    }

    #[test]
    fn test_order_clause_follows_upcoming() {
        assert_eq!(EventFilterBuilder::order_clause(Some(true)), "e.event_date ASC");
        assert_eq!(EventFilterBuilder::order_clause(Some(false)), "e.event_date DESC");
        assert_eq!(EventFilterBuilder::order_clause(None), "e.event_date DESC");
    }

    #[test]
    fn test_event_page_limit_takes_precedence() {
        let page = EventPage::from_query(Some(3), Some(2), Some(50));
        assert_eq!(page, EventPage::Limit(3));
    }

    #[test]
    fn test_event_page_defaults_to_paged() {
        let page = EventPage::from_query(None, Some(2), None);
        match page {
            EventPage::Paged(params) => {
                assert_eq!(params.page(), 2);
                assert_eq!(params.page_size(), 10);
                assert_eq!(params.offset(), 10);
            }
            EventPage::Limit(_) => panic!("expected paged"),
        }
    }

    #[test]
    fn test_event_page_negative_limit_clamped() {
        assert_eq!(EventPage::from_query(Some(-5), None, None), EventPage::Limit(0));
    }
}
