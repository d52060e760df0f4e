//! Event registration domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registration for an event. Append-only: registrations are never updated,
/// and are removed only when their event is deleted (cascade).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for registering for an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForEventRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterForEventRequest {
            name: "Jordan Reyes".to_string(),
            email: "jordan@example.org".to_string(),
            phone: Some("555-0102".to_string()),
            notes: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterForEventRequest {
            name: "Jordan Reyes".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            notes: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_request_rejects_empty_name() {
        let request = RegisterForEventRequest {
            name: String::new(),
            email: "jordan@example.org".to_string(),
            phone: None,
            notes: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
