//! Shared types for the API layer.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::nutrition::NutritionClient;
use crate::ocr::OcrEngine;

/// Shared context for all API routes.
///
/// Everything in here is configuration or a stateless collaborator; requests
/// share nothing mutable. The OCR value only carries engine configuration —
/// the native engine itself is scoped to each `recognize` call.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<AppConfig>,
    pub nutrition: Arc<NutritionClient>,
    pub ocr: Arc<dyn OcrEngine>,
}

impl ApiContext {
    pub fn new(
        config: Arc<AppConfig>,
        nutrition: Arc<NutritionClient>,
        ocr: Arc<dyn OcrEngine>,
    ) -> Self {
        Self {
            config,
            nutrition,
            ocr,
        }
    }
}
