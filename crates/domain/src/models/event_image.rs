//! Event image domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An image attached to an event.
///
/// The first uploaded image is flagged featured and doubles as the event's
/// primary `image_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventImage {
    pub id: i64,
    pub event_id: i64,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_image_serializes_camel_case() {
        let image = EventImage {
            id: 1,
            event_id: 10,
            image_url: "https://cdn.example.org/gala.jpg".to_string(),
            alt_text: Some("Gala hall".to_string()),
            is_featured: true,
            display_order: 0,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["eventId"], 10);
        assert_eq!(json["imageUrl"], "https://cdn.example.org/gala.jpg");
        assert_eq!(json["isFeatured"], true);
        assert_eq!(json["displayOrder"], 0);
    }
}
