//! Event category endpoint handlers.

use axum::{extract::State, Json};
use persistence::repositories::EventCategoryRepository;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::EventCategory;

/// Response for listing categories.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesResponse {
    pub categories: Vec<EventCategory>,
    pub total: usize,
}

/// List all event categories, ordered by name.
///
/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ListCategoriesResponse>, ApiError> {
    let category_repo = EventCategoryRepository::new(state.pool.clone());
    let categories = category_repo.list().await?;
    let total = categories.len();

    Ok(Json(ListCategoriesResponse { categories, total }))
}
