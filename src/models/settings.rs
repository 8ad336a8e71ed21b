//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

use remixer_llm::{is_known_model, DEFAULT_MODEL};

fn default_timeout_secs() -> u64 {
    60
}

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Active model id; every generation run uses this model
    pub model: String,
    /// Per-call request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub model: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Validate model against the catalog
        if !is_known_model(&self.model) {
            return Err(format!("Unknown model: {}", self.model));
        }

        // Validate request_timeout_secs
        if self.request_timeout_secs < 5 {
            return Err("request_timeout_secs must be at least 5 seconds".to_string());
        }
        if self.request_timeout_secs > 600 {
            return Err("request_timeout_secs cannot exceed 600 seconds".to_string());
        }

        Ok(())
    }
}
