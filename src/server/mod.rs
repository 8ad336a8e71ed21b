//! HTTP Server
//!
//! Contains all HTTP route handlers and the router/server assembly.
//! These are the API entry points for the application.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use remixer_llm::ProviderError;

use crate::models::response::ApiResponse;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub mod auth;
pub mod catalog;
pub mod credentials;
pub mod generation;
pub mod health;
pub mod results;
pub mod settings;
pub mod templates;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) | AppError::Validation(_) | AppError::Core(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Pre-dispatch gates the client can fix; anything past them
            // means the upstream provider misbehaved.
            AppError::Generation(
                ProviderError::MissingCredential { .. } | ProviderError::UnknownModel { .. },
            ) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ApiResponse::<()>::err(self.to_string()))).into_response()
    }
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generation::generate))
        .route("/api/results", get(results::list_results))
        .route("/api/results/:asset_id", put(results::edit_result))
        .route("/api/export", get(results::export_results))
        .route(
            "/api/templates",
            get(templates::list_templates).delete(templates::reset_all_templates),
        )
        .route(
            "/api/templates/:asset_id",
            put(templates::update_template).delete(templates::reset_template),
        )
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/credentials", get(credentials::list_credentials))
        .route(
            "/api/credentials/:provider",
            put(credentials::set_credential).delete(credentials::delete_credential),
        )
        .route("/api/models", get(catalog::list_models))
        .route("/api/assets", get(catalog::list_assets))
        .route("/health", get(health::get_health))
        .route("/auth/linkedin", get(auth::linkedin_authorize))
        .route("/auth/linkedin/callback", get(auth::linkedin_callback))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind to localhost and serve until ctrl-c.
pub async fn serve(state: AppState, port: u16) -> AppResult<()> {
    let app = build_router(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(port, "Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
