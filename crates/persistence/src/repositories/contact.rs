//! Contact submission repository.

use domain::models::{ContactStatus, ContactSubmission, CreateContactRequest};
use sqlx::PgPool;

use crate::entities::ContactSubmissionEntity;

const CONTACT_SELECT: &str = r#"
    SELECT id, first_name, last_name, email, subject, message, phone, status,
           created_at, updated_at
    FROM contact_submissions
"#;

/// Repository for contact form submissions.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a new submission with status 'unread'.
    pub async fn create(
        &self,
        request: &CreateContactRequest,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let entity = sqlx::query_as::<_, ContactSubmissionEntity>(
            r#"
            INSERT INTO contact_submissions
                (first_name, last_name, email, subject, message, phone, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'unread')
            RETURNING id, first_name, last_name, email, subject, message, phone,
                      status, created_at, updated_at
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.subject)
        .bind(&request.message)
        .bind(&request.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find a submission by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", CONTACT_SELECT);
        let entity = sqlx::query_as::<_, ContactSubmissionEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity.map(ContactSubmission::from))
    }

    /// List submissions, optionally restricted to one status, oldest first.
    pub async fn list(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let entities = match status {
            Some(status) => {
                let query = format!(
                    "{} WHERE status = $1 ORDER BY created_at ASC",
                    CONTACT_SELECT
                );
                sqlx::query_as::<_, ContactSubmissionEntity>(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY created_at ASC", CONTACT_SELECT);
                sqlx::query_as::<_, ContactSubmissionEntity>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(entities.into_iter().map(ContactSubmission::from).collect())
    }

    /// Change a submission's read state, refreshing updated_at. Returns the
    /// authoritative row so clients can reconcile optimistic updates.
    pub async fn update_status(
        &self,
        id: i64,
        status: ContactStatus,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ContactSubmissionEntity>(
            r#"
            UPDATE contact_submissions
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, subject, message, phone,
                      status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(ContactSubmission::from))
    }

    /// Delete a submission. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
