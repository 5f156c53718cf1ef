//! Upstream nutrition database client.
//!
//! Thin proxy: forward the food name as a query, reshape the upstream item
//! list into the compact summary the frontend expects. No algorithmic
//! content lives here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutritionError {
    #[error("Nutrition API key is not configured")]
    MissingApiKey,

    #[error("Nutrition API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Nutrition API returned status {0}")]
    UpstreamStatus(u16),
}

/// HTTP client for a CalorieNinjas-style nutrition API
/// (`GET {base}/nutrition?query=...` with an `X-Api-Key` header).
pub struct NutritionClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

/// Response body from the upstream `/nutrition` endpoint.
#[derive(Deserialize)]
struct UpstreamResponse {
    items: Vec<UpstreamItem>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct UpstreamItem {
    name: String,
    calories: f64,
    serving_size_g: f64,
    protein_g: f64,
    fat_total_g: f64,
    carbohydrates_total_g: f64,
    sugar_g: f64,
    fiber_g: f64,
    sodium_mg: f64,
}

/// Reshaped per-item summary returned to our clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrition {
    pub name: String,
    pub calories: f64,
    pub serving_size_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub sugar_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: f64,
}

impl From<UpstreamItem> for FoodNutrition {
    fn from(item: UpstreamItem) -> Self {
        Self {
            name: item.name,
            calories: item.calories,
            serving_size_g: item.serving_size_g,
            protein_g: item.protein_g,
            fat_g: item.fat_total_g,
            carbs_g: item.carbohydrates_total_g,
            sugar_g: item.sugar_g,
            fiber_g: item.fiber_g,
            sodium_mg: item.sodium_mg,
        }
    }
}

impl NutritionClient {
    /// Create a new client for the given base URL and API key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    /// Look up nutrition facts for a food name. The upstream accepts free
    /// text ("1 cup rice"), so the query passes through unmodified.
    pub async fn lookup(&self, query: &str) -> Result<Vec<FoodNutrition>, NutritionError> {
        if self.api_key.is_empty() {
            return Err(NutritionError::MissingApiKey);
        }

        let url = format!("{}/nutrition", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NutritionError::UpstreamStatus(status.as_u16()));
        }

        let body: UpstreamResponse = response.json().await?;
        Ok(body.items.into_iter().map(FoodNutrition::from).collect())
    }
}
