//! Application State
//!
//! Shared state handed to every request handler, containing all services.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::RunConfig;
use crate::services::{GenerationService, OAuthService, ResultStore, TemplateStore};
use crate::storage::{ConfigService, CredentialStore, Database};
use crate::utils::error::AppResult;

/// Shared application state.
///
/// Cheap to clone: every field is behind an `Arc`. Stores with interior
/// mutability sit behind an async `RwLock`; the database pool and the
/// long-lived services manage their own synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<ConfigService>>,
    pub credentials: Arc<RwLock<CredentialStore>>,
    pub templates: Arc<RwLock<TemplateStore>>,
    pub results: Arc<RwLock<ResultStore>>,
    pub database: Arc<Database>,
    pub generation: Arc<GenerationService>,
    pub oauth: Arc<OAuthService>,
}

impl AppState {
    /// Assemble state from pre-built services.
    ///
    /// The generation service is wired here so that it works against the
    /// same template, credential, and result stores the handlers see.
    pub fn new(
        config: ConfigService,
        credentials: CredentialStore,
        templates: TemplateStore,
        database: Arc<Database>,
        oauth: OAuthService,
    ) -> Self {
        let config = Arc::new(RwLock::new(config));
        let credentials = Arc::new(RwLock::new(credentials));
        let templates = Arc::new(RwLock::new(templates));
        let results = Arc::new(RwLock::new(ResultStore::new()));
        let generation = Arc::new(GenerationService::new(
            Arc::clone(&templates),
            Arc::clone(&credentials),
            Arc::clone(&results),
        ));

        Self {
            config,
            credentials,
            templates,
            results,
            database,
            generation,
            oauth: Arc::new(oauth),
        }
    }

    /// Initialize all services against the on-disk data directory.
    ///
    /// Creates `~/.remixer/` and its files on first run. LinkedIn OAuth is
    /// configured from the environment; when the variables are absent the
    /// server still starts and only the auth routes report the gap.
    pub fn initialize() -> AppResult<Self> {
        let database = Arc::new(Database::new()?);
        let oauth = OAuthService::new(Arc::clone(&database));

        Ok(Self::new(
            ConfigService::new()?,
            CredentialStore::new()?,
            TemplateStore::new()?,
            database,
            oauth,
        ))
    }

    /// Snapshot the current settings as a per-run generation config.
    pub async fn run_config(&self) -> RunConfig {
        let config = self.config.read().await.get_config_clone();
        RunConfig::new(config.model, config.request_timeout_secs)
    }

    /// Check if the database is healthy
    pub fn is_database_healthy(&self) -> bool {
        self.database.is_healthy()
    }

    /// Check if the config store is healthy
    pub async fn is_config_healthy(&self) -> bool {
        self.config.read().await.is_healthy()
    }

    /// Check if the template store is healthy
    pub async fn is_templates_healthy(&self) -> bool {
        self.templates.read().await.is_healthy()
    }

    /// Check if the credential store is healthy
    pub async fn is_credentials_healthy(&self) -> bool {
        self.credentials.read().await.is_healthy()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("oauth_configured", &self.oauth.is_configured())
            .finish()
    }
}
