//! Event domain model and event query/mutation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::event_image::EventImage;

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
    Completed,
}

impl EventStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Published => "published",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Completed => "completed",
        }
    }

    /// Parses from database string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(EventStatus::Draft),
            "published" => Some(EventStatus::Published),
            "cancelled" => Some(EventStatus::Cancelled),
            "completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }
}

/// Structured SEO metadata stored alongside an event.
///
/// Always derived from the event itself, never supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SeoMetadata {
    /// Builds SEO metadata for an event: the title plus a 160-character
    /// excerpt of the description.
    pub fn for_event(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: shared::validation::seo_excerpt(description),
            kind: "event".to_string(),
        }
    }
}

/// Represents an event, joined with its category name and image set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: Option<String>,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    /// Resolved via left join; null when the event has no category.
    pub category_name: Option<String>,
    pub status: EventStatus,
    pub is_featured: bool,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub seo_metadata: Option<serde_json::Value>,
    /// Ordered featured-first, then by display order.
    pub images: Vec<EventImage>,
}

/// Filter specification for event listings and counts.
///
/// All fields are optional and combine conjunctively. `Some(false)` on
/// `featured` or `upcoming` is a real predicate, not an absent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub featured: Option<bool>,
    pub category_id: Option<i64>,
    pub upcoming: Option<bool>,
}

/// Query parameters for listing events.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    pub status: Option<EventStatus>,
    pub featured: Option<bool>,
    pub category_id: Option<i64>,
    pub upcoming: Option<bool>,
    /// Caps the result count with no offset; takes precedence over
    /// page/pageSize when present.
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListEventsQuery {
    pub fn filter(&self) -> EventFilter {
        EventFilter {
            status: self.status,
            featured: self.featured,
            category_id: self.category_id,
            upcoming: self.upcoming,
        }
    }
}

fn default_is_featured() -> bool {
    false
}

/// Request payload for creating or updating an event (full replacement of
/// mutable fields).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,

    #[validate(length(min = 3, message = "Slug must be at least 3 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,

    pub content: Option<String>,

    #[validate(length(min = 3, message = "Location must be at least 3 characters"))]
    pub location: String,

    pub event_date: DateTime<Utc>,

    pub event_end_date: Option<DateTime<Utc>>,

    pub category_id: Option<i64>,

    pub status: EventStatus,

    #[serde(default = "default_is_featured")]
    pub is_featured: bool,

    /// Ordered image URLs. `None` leaves the stored image set untouched;
    /// `Some(vec![])` clears it.
    pub images: Option<Vec<String>>,
}

/// Response payload for a single event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self { event }
    }
}

/// Response for listing events.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}
