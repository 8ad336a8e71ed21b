//! Template Endpoints
//!
//! Read and customize the per-asset prompt templates.

use axum::extract::{Path, State};
use axum::Json;

use remixer_core::{Template, TemplateUpdate};

use crate::models::response::ApiResponse;
use crate::services::TemplateView;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Get the resolved template for every cataloged asset
pub async fn list_templates(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<TemplateView>>>> {
    let templates = state.templates.read().await.list()?;
    Ok(Json(ApiResponse::ok(templates)))
}

/// Apply a partial update to one asset's template
pub async fn update_template(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    Json(update): Json<TemplateUpdate>,
) -> AppResult<Json<ApiResponse<Template>>> {
    let template = state.templates.write().await.update(&asset_id, update)?;
    Ok(Json(ApiResponse::ok(template)))
}

/// Drop one asset's override, returning the built-in default
pub async fn reset_template(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> AppResult<Json<ApiResponse<Template>>> {
    let mut templates = state.templates.write().await;
    templates.reset(&asset_id)?;
    let template = templates.resolve(&asset_id)?;
    Ok(Json(ApiResponse::ok(template)))
}

/// Drop every override, returning the refreshed list
pub async fn reset_all_templates(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<TemplateView>>>> {
    let mut templates = state.templates.write().await;
    templates.reset_all()?;
    let list = templates.list()?;
    Ok(Json(ApiResponse::ok(list)))
}
