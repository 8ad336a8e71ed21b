//! Generation Endpoint
//!
//! Accepts a source text plus asset selection and runs the fan-out batch.

use axum::extract::State;
use axum::Json;

use crate::models::generation::{BatchReport, GenerateRequest};
use crate::models::response::ApiResponse;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Run one generation batch over the selected assets.
///
/// A batch that dispatched is reported with HTTP 200 regardless of how its
/// calls fared; the envelope carries the outcome. Requests rejected before
/// dispatch (empty input, unknown model, missing credential) map to error
/// statuses instead.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> AppResult<Json<ApiResponse<BatchReport>>> {
    let run = state.run_config().await;
    let report = state.generation.generate_all(request, run).await?;

    let envelope = if report.published {
        ApiResponse::ok(report)
    } else {
        let message = match &report.error {
            Some(error) => error.to_string(),
            None => "Generation superseded by a newer request".to_string(),
        };
        ApiResponse::err_with_data(message, report)
    };

    Ok(Json(envelope))
}
