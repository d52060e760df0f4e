//! Newsletter subscriber domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Subscription status.
///
/// Unsubscribing is a soft transition: the row is kept with status flipped and
/// timestamp refreshed. Hard removal is a separate delete operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    Unsubscribed,
}

impl SubscriberStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberStatus::Active => "active",
            SubscriberStatus::Unsubscribed => "unsubscribed",
        }
    }

    /// Parses from database string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(SubscriberStatus::Active),
            "unsubscribed" => Some(SubscriberStatus::Unsubscribed),
            _ => None,
        }
    }
}

/// A newsletter subscriber, keyed by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: DateTime<Utc>,
    pub status: SubscriberStatus,
    /// Where the signup came from (footer form, event page, ...).
    pub source: Option<String>,
}

/// Request payload for subscribing to the newsletter.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Source must be at most 100 characters"))]
    pub source: Option<String>,
}

/// Request payload for unsubscribing.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnsubscribeRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}

/// Request payload for updating a subscriber's details.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriberRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Source must be at most 100 characters"))]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_status_str_roundtrip() {
        for status in [SubscriberStatus::Active, SubscriberStatus::Unsubscribed] {
            assert_eq!(SubscriberStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(SubscriberStatus::from_str("paused"), None);
    }

    #[test]
    fn test_subscribe_request_valid() {
        let request = SubscribeRequest {
            email: "friend@example.org".to_string(),
            name: Some("Casey".to_string()),
            source: Some("footer".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_subscribe_request_rejects_bad_email() {
        let request = SubscribeRequest {
            email: "nope".to_string(),
            name: None,
            source: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_subscriber_serializes_status_lowercase() {
        let subscriber = NewsletterSubscriber {
            id: 1,
            email: "friend@example.org".to_string(),
            name: None,
            subscribed_at: Utc::now(),
            status: SubscriberStatus::Unsubscribed,
            source: None,
        };
        let json = serde_json::to_value(&subscriber).unwrap();
        assert_eq!(json["status"], "unsubscribed");
        assert!(json.get("subscribedAt").is_some());
    }
}
