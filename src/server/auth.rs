//! LinkedIn Auth Endpoints
//!
//! Browser-facing OAuth flow: redirect out to LinkedIn, then receive the
//! callback. The callback answers in plain text, not the JSON envelope,
//! because LinkedIn sends the user's browser here directly.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::error;

use crate::state::AppState;
use crate::utils::error::AppResult;

/// Query parameters LinkedIn sends to the callback
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// Redirect the browser to LinkedIn's authorization page
pub async fn linkedin_authorize(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let url = state.oauth.authorize_url()?;
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}

/// Receive the authorization code and complete the token exchange
pub async fn linkedin_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    let Some(code) = params.code else {
        return (StatusCode::BAD_REQUEST, "Missing code").into_response();
    };

    match state.oauth.handle_callback(&code).await {
        Ok(_user) => (
            StatusCode::OK,
            "LinkedIn authentication successful! You can close this window.",
        )
            .into_response(),
        Err(e) => {
            error!("LinkedIn authentication failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "LinkedIn authentication failed.",
            )
                .into_response()
        }
    }
}
