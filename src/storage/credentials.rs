//! Credential Storage
//!
//! Provider API keys persisted as a cleartext JSON key-value file under
//! the app directory. Keys are read at run start and never cached inside
//! provider adapters.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use remixer_llm::ProviderType;

use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{credentials_path, ensure_remixer_dir};

/// File-backed store for provider API keys
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    credentials: HashMap<String, String>,
}

impl CredentialStore {
    /// Create a new credential store, loading existing credentials or
    /// creating an empty file
    pub fn new() -> AppResult<Self> {
        ensure_remixer_dir()?;
        Self::with_path(credentials_path()?)
    }

    /// Create a credential store backed by an explicit file path
    pub fn with_path(path: PathBuf) -> AppResult<Self> {
        let credentials = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            let empty = HashMap::new();
            Self::save_to_file(&path, &empty)?;
            empty
        };

        Ok(Self { path, credentials })
    }

    fn save_to_file(path: &PathBuf, credentials: &HashMap<String, String>) -> AppResult<()> {
        let content = serde_json::to_string_pretty(credentials)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn save(&self) -> AppResult<()> {
        Self::save_to_file(&self.path, &self.credentials)
    }

    /// Store an API key for a provider
    pub fn set_api_key(&mut self, provider: ProviderType, key: &str) -> AppResult<()> {
        if key.trim().is_empty() {
            return Err(AppError::validation("API key cannot be empty"));
        }
        self.credentials
            .insert(provider.as_str().to_string(), key.to_string());
        self.save()
    }

    /// Retrieve an API key for a provider
    pub fn get_api_key(&self, provider: ProviderType) -> Option<String> {
        self.credentials.get(provider.as_str()).cloned()
    }

    /// Delete an API key for a provider. Deleting an absent key is not an
    /// error.
    pub fn delete_api_key(&mut self, provider: ProviderType) -> AppResult<()> {
        if self.credentials.remove(provider.as_str()).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// List all providers that have stored API keys, in catalog order.
    /// Secrets themselves are never listed.
    pub fn list_providers(&self) -> Vec<String> {
        [ProviderType::OpenAI, ProviderType::Anthropic]
            .iter()
            .filter(|p| self.has_api_key(**p))
            .map(|p| p.as_str().to_string())
            .collect()
    }

    /// Check if an API key exists for a provider
    pub fn has_api_key(&self, provider: ProviderType) -> bool {
        self.credentials.contains_key(provider.as_str())
    }

    /// Check if the credential store is healthy
    pub fn is_healthy(&self) -> bool {
        self.path.exists()
    }
}
