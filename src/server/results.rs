//! Results Endpoints
//!
//! Read, edit, and export the currently published results.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::models::generation::GeneratedAsset;
use crate::models::response::ApiResponse;
use crate::services::EXPORT_FILENAME;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Body for editing a single result
#[derive(Debug, Deserialize)]
pub struct EditResultRequest {
    pub content: String,
}

/// Get all published results in catalog order
pub async fn list_results(State(state): State<AppState>) -> Json<ApiResponse<Vec<GeneratedAsset>>> {
    let results = state.results.read().await.get_all();
    Json(ApiResponse::ok(results))
}

/// Overwrite one asset's result text
pub async fn edit_result(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    Json(request): Json<EditResultRequest>,
) -> AppResult<Json<ApiResponse<Vec<GeneratedAsset>>>> {
    let mut results = state.results.write().await;
    results.edit(&asset_id, request.content)?;
    Ok(Json(ApiResponse::ok(results.get_all())))
}

/// Download all results as a plain-text file
pub async fn export_results(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.results.read().await.export_all();
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILENAME);

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
}
