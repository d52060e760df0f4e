//! Newsletter subscriber repository.

use domain::models::{NewsletterSubscriber, SubscribeRequest, UpdateSubscriberRequest};
use sqlx::PgPool;

use crate::entities::NewsletterSubscriberEntity;

const SUBSCRIBER_SELECT: &str =
    "SELECT id, email, name, subscribed_at, status, source FROM newsletter_subscribers";

/// Repository for newsletter subscriber operations. Email is the natural key.
#[derive(Clone)]
pub struct NewsletterRepository {
    pool: PgPool,
}

impl NewsletterRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Subscribe an email address. A duplicate email violates the unique
    /// constraint and surfaces as a database error for the caller to map.
    pub async fn subscribe(
        &self,
        request: &SubscribeRequest,
    ) -> Result<NewsletterSubscriber, sqlx::Error> {
        let entity = sqlx::query_as::<_, NewsletterSubscriberEntity>(
            r#"
            INSERT INTO newsletter_subscribers (email, name, source, status)
            VALUES ($1, $2, $3, 'active')
            RETURNING id, email, name, subscribed_at, status, source
            "#,
        )
        .bind(&request.email)
        .bind(&request.name)
        .bind(&request.source)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Soft unsubscribe: flip status and refresh the timestamp, keeping the
    /// row. Returns None when the email is unknown.
    pub async fn unsubscribe(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
        let entity = sqlx::query_as::<_, NewsletterSubscriberEntity>(
            r#"
            UPDATE newsletter_subscribers
            SET status = 'unsubscribed', subscribed_at = NOW()
            WHERE email = $1
            RETURNING id, email, name, subscribed_at, status, source
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(NewsletterSubscriber::from))
    }

    /// Find a subscriber by email.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
        let query = format!("{} WHERE email = $1", SUBSCRIBER_SELECT);
        let entity = sqlx::query_as::<_, NewsletterSubscriberEntity>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity.map(NewsletterSubscriber::from))
    }

    /// List all subscribers, newest first.
    pub async fn list(&self) -> Result<Vec<NewsletterSubscriber>, sqlx::Error> {
        let query = format!("{} ORDER BY subscribed_at DESC", SUBSCRIBER_SELECT);
        let entities = sqlx::query_as::<_, NewsletterSubscriberEntity>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities.into_iter().map(NewsletterSubscriber::from).collect())
    }

    /// List subscribers with status 'active', newest first.
    pub async fn list_active(&self) -> Result<Vec<NewsletterSubscriber>, sqlx::Error> {
        let query = format!(
            "{} WHERE status = 'active' ORDER BY subscribed_at DESC",
            SUBSCRIBER_SELECT
        );
        let entities = sqlx::query_as::<_, NewsletterSubscriberEntity>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities.into_iter().map(NewsletterSubscriber::from).collect())
    }

    /// Update a subscriber's details. Absent fields are left untouched.
    pub async fn update(
        &self,
        email: &str,
        request: &UpdateSubscriberRequest,
    ) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
        let entity = sqlx::query_as::<_, NewsletterSubscriberEntity>(
            r#"
            UPDATE newsletter_subscribers
            SET name = COALESCE($2, name), source = COALESCE($3, source)
            WHERE email = $1
            RETURNING id, email, name, subscribed_at, status, source
            "#,
        )
        .bind(email)
        .bind(&request.name)
        .bind(&request.source)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(NewsletterSubscriber::from))
    }

    /// Hard delete a subscriber row. Returns whether a row was removed.
    pub async fn delete(&self, email: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM newsletter_subscribers WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
