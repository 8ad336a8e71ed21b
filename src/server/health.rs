//! Health Endpoint
//!
//! Reports the health status of backend services.

use axum::extract::State;
use axum::Json;

use crate::models::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// Get the health status of all backend services
pub async fn get_health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let mut health = HealthResponse::default();

    health.database = state.is_database_healthy();
    health.config = state.is_config_healthy().await;
    health.templates = state.is_templates_healthy().await;
    health.credentials = state.is_credentials_healthy().await;

    health.status = if health.database && health.config && health.templates && health.credentials {
        "healthy".to_string()
    } else {
        "degraded".to_string()
    };

    Json(ApiResponse::ok(health))
}
