//! Event category domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category events may reference. Shared, not owned: deleting events never
/// touches categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
