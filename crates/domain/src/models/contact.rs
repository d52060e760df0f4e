//! Contact form submission domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Read state of a contact submission. Transitions unread -> read when an
/// admin opens it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Unread,
    Read,
}

impl ContactStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Unread => "unread",
            ContactStatus::Read => "read",
        }
    }

    /// Parses from database string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unread" => Some(ContactStatus::Unread),
            "read" => Some(ContactStatus::Read),
            _ => None,
        }
    }
}

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phone: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for the public contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,
}

/// Request payload for changing a submission's read state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}
