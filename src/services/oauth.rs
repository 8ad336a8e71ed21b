//! LinkedIn OAuth
//!
//! One-time authorization-code handshake: build the authorize redirect,
//! exchange the callback code for an access token, fetch the member id,
//! and upsert the token into the users table.

use std::sync::Arc;

use serde::Deserialize;

use crate::storage::database::Database;
use crate::utils::error::{AppError, AppResult};

/// Scope requested from LinkedIn; posting on the member's behalf
const LINKEDIN_SCOPE: &str = "w_member_social";

/// LinkedIn application credentials, read from the environment
#[derive(Debug, Clone)]
pub struct LinkedInConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl LinkedInConfig {
    /// Read `LINKEDIN_CLIENT_ID`, `LINKEDIN_CLIENT_SECRET`, and
    /// `LINKEDIN_REDIRECT_URI`. All three are required; any missing var
    /// leaves OAuth unconfigured without failing startup.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            client_id: std::env::var("LINKEDIN_CLIENT_ID").ok()?,
            client_secret: std::env::var("LINKEDIN_CLIENT_SECRET").ok()?,
            redirect_uri: std::env::var("LINKEDIN_REDIRECT_URI").ok()?,
        })
    }
}

/// LinkedIn endpoint set, overridable for tests
#[derive(Debug, Clone)]
pub struct LinkedInEndpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub profile_url: String,
}

impl Default for LinkedInEndpoints {
    fn default() -> Self {
        Self {
            authorize_url: "https://www.linkedin.com/oauth/v2/authorization".to_string(),
            token_url: "https://www.linkedin.com/oauth/v2/accessToken".to_string(),
            profile_url: "https://api.linkedin.com/v2/me".to_string(),
        }
    }
}

/// Outcome of a completed callback exchange
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub linkedin_id: String,
    pub expires_at: i64,
}

/// OAuth service for the LinkedIn handshake
pub struct OAuthService {
    config: Option<LinkedInConfig>,
    endpoints: LinkedInEndpoints,
    client: reqwest::Client,
    database: Arc<Database>,
}

impl OAuthService {
    /// Create the service with environment configuration and production
    /// endpoints
    pub fn new(database: Arc<Database>) -> Self {
        Self::with_config(LinkedInConfig::from_env(), LinkedInEndpoints::default(), database)
    }

    /// Create the service with explicit configuration and endpoints
    pub fn with_config(
        config: Option<LinkedInConfig>,
        endpoints: LinkedInEndpoints,
        database: Arc<Database>,
    ) -> Self {
        Self {
            config,
            endpoints,
            client: reqwest::Client::new(),
            database,
        }
    }

    /// Whether LinkedIn credentials are configured
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    fn config(&self) -> AppResult<&LinkedInConfig> {
        self.config
            .as_ref()
            .ok_or_else(|| AppError::config("LinkedIn OAuth is not configured"))
    }

    /// Build the authorize redirect URL
    pub fn authorize_url(&self) -> AppResult<String> {
        let config = self.config()?;
        Ok(format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}",
            self.endpoints.authorize_url,
            config.client_id,
            urlencoding::encode(&config.redirect_uri),
            urlencoding::encode(LINKEDIN_SCOPE),
        ))
    }

    /// Exchange the callback code, fetch the member id, and store the token
    pub async fn handle_callback(&self, code: &str) -> AppResult<AuthenticatedUser> {
        let config = self.config()?;

        let response = self
            .client
            .post(&self.endpoints.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::oauth(format!("Token exchange failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::oauth(format!("Token exchange failed: {}", e)))?;
        if status != 200 {
            return Err(AppError::oauth(format!(
                "Token exchange failed: HTTP {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::oauth(format!("Unexpected token response: {}", e)))?;

        let response = self
            .client
            .get(&self.endpoints.profile_url)
            .header("Authorization", format!("Bearer {}", token.access_token))
            .send()
            .await
            .map_err(|e| AppError::oauth(format!("Profile fetch failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::oauth(format!("Profile fetch failed: {}", e)))?;
        if status != 200 {
            return Err(AppError::oauth(format!(
                "Profile fetch failed: HTTP {}: {}",
                status, body
            )));
        }

        let profile: ProfileResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::oauth(format!("Unexpected profile response: {}", e)))?;

        let expires_at = chrono::Utc::now().timestamp() + token.expires_in;
        self.database
            .upsert_user(&profile.id, &token.access_token, expires_at)?;

        tracing::info!(linkedin_id = %profile.id, "LinkedIn user authenticated");

        Ok(AuthenticatedUser {
            linkedin_id: profile.id,
            expires_at,
        })
    }
}

/// LinkedIn token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// LinkedIn profile endpoint response
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: String,
}
