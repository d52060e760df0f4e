//! Newsletter subscriber entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{NewsletterSubscriber, SubscriberStatus};
use sqlx::FromRow;

/// Database row mapping for the newsletter_subscribers table.
#[derive(Debug, Clone, FromRow)]
pub struct NewsletterSubscriberEntity {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: DateTime<Utc>,
    pub status: String,
    pub source: Option<String>,
}

impl From<NewsletterSubscriberEntity> for NewsletterSubscriber {
    fn from(entity: NewsletterSubscriberEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            subscribed_at: entity.subscribed_at,
            status: SubscriberStatus::from_str(&entity.status)
                .unwrap_or(SubscriberStatus::Active),
            source: entity.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_entity_to_domain() {
        let entity = NewsletterSubscriberEntity {
            id: 1,
            email: "friend@example.org".to_string(),
            name: Some("Casey".to_string()),
            subscribed_at: Utc::now(),
            status: "unsubscribed".to_string(),
            source: Some("footer".to_string()),
        };
        let subscriber: NewsletterSubscriber = entity.into();
        assert_eq!(subscriber.status, SubscriberStatus::Unsubscribed);
        assert_eq!(subscriber.source.as_deref(), Some("footer"));
    }

    #[test]
    fn test_unknown_status_falls_back_to_active() {
        let entity = NewsletterSubscriberEntity {
            id: 2,
            email: "other@example.org".to_string(),
            name: None,
            subscribed_at: Utc::now(),
            status: "pending".to_string(),
            source: None,
        };
        let subscriber: NewsletterSubscriber = entity.into();
        assert_eq!(subscriber.status, SubscriberStatus::Active);
    }
}
