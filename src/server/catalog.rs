//! Catalog Endpoints
//!
//! Static catalogs: selectable assets and available models.

use axum::Json;
use serde::Serialize;

use remixer_core::{AssetDefinition, ASSET_CATALOG};
use remixer_llm::{models_for_provider, ProviderType};

use crate::models::response::ApiResponse;

/// Models available from one provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderModels {
    pub provider: &'static str,
    pub models: Vec<&'static str>,
}

/// Get the model catalog grouped by provider
pub async fn list_models() -> Json<ApiResponse<Vec<ProviderModels>>> {
    let groups = [ProviderType::OpenAI, ProviderType::Anthropic]
        .into_iter()
        .map(|provider| ProviderModels {
            provider: provider.as_str(),
            models: models_for_provider(provider),
        })
        .collect();
    Json(ApiResponse::ok(groups))
}

/// Get the asset catalog in declared order
pub async fn list_assets() -> Json<ApiResponse<Vec<AssetDefinition>>> {
    Json(ApiResponse::ok(ASSET_CATALOG.to_vec()))
}
