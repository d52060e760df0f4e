//! Contact submission entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{ContactStatus, ContactSubmission};
use sqlx::FromRow;

/// Database row mapping for the contact_submissions table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactSubmissionEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactSubmissionEntity> for ContactSubmission {
    fn from(entity: ContactSubmissionEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            phone: entity.phone,
            status: ContactStatus::from_str(&entity.status).unwrap_or(ContactStatus::Unread),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_entity_to_domain() {
        let entity = ContactSubmissionEntity {
            id: 4,
            first_name: "Avery".to_string(),
            last_name: "Kim".to_string(),
            email: "avery@example.org".to_string(),
            subject: "Volunteering".to_string(),
            message: "I'd like to help.".to_string(),
            phone: None,
            status: "read".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let submission: ContactSubmission = entity.into();
        assert_eq!(submission.status, ContactStatus::Read);
        assert_eq!(submission.first_name, "Avery");
    }
}
