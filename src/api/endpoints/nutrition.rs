//! `GET /api/nutrition?item=<food name>` — nutrition lookup proxy.
//!
//! Forwards the food name to the upstream nutrition database and returns the
//! reshaped per-item summaries. No caching, no retries; upstream failures
//! surface as 502.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::nutrition::FoodNutrition;

#[derive(Deserialize)]
pub struct NutritionQuery {
    pub item: String,
}

#[derive(Serialize)]
pub struct NutritionResponse {
    pub query: String,
    pub items: Vec<FoodNutrition>,
}

pub async fn lookup(
    State(ctx): State<ApiContext>,
    Query(params): Query<NutritionQuery>,
) -> Result<Json<NutritionResponse>, ApiError> {
    let query = params.item.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query parameter `item` is empty".into()));
    }

    let items = ctx.nutrition.lookup(query).await?;

    tracing::info!(query, items = items.len(), "Nutrition lookup");

    Ok(Json(NutritionResponse {
        query: query.to_string(),
        items,
    }))
}
