//! Credential Endpoints
//!
//! Store, list, and remove provider API keys. Responses only ever carry
//! provider names; the secrets themselves stay in the store.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use remixer_llm::ProviderType;

use crate::models::response::ApiResponse;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Body for saving a provider API key
#[derive(Debug, Deserialize)]
pub struct SetCredentialRequest {
    pub api_key: String,
}

/// List providers that have a stored API key
pub async fn list_credentials(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    let providers = state.credentials.read().await.list_providers();
    Json(ApiResponse::ok(providers))
}

/// Save an API key for a provider
pub async fn set_credential(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Json(request): Json<SetCredentialRequest>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let provider: ProviderType = provider.parse().map_err(AppError::InvalidInput)?;
    let mut credentials = state.credentials.write().await;
    credentials.set_api_key(provider, &request.api_key)?;
    Ok(Json(ApiResponse::ok(credentials.list_providers())))
}

/// Remove a provider's API key
pub async fn delete_credential(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let provider: ProviderType = provider.parse().map_err(AppError::InvalidInput)?;
    let mut credentials = state.credentials.write().await;
    credentials.delete_api_key(provider)?;
    Ok(Json(ApiResponse::ok(credentials.list_providers())))
}
