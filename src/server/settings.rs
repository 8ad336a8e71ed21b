//! Settings Endpoints
//!
//! Read and update application settings.

use axum::extract::State;
use axum::Json;

use crate::models::response::ApiResponse;
use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Get current application settings
pub async fn get_settings(State(state): State<AppState>) -> Json<ApiResponse<AppConfig>> {
    let config = state.config.read().await.get_config_clone();
    Json(ApiResponse::ok(config))
}

/// Update application settings with a partial update
pub async fn update_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> AppResult<Json<ApiResponse<AppConfig>>> {
    let config = state.config.write().await.update_config(update)?;
    Ok(Json(ApiResponse::ok(config)))
}
