//! Provider Types
//!
//! Core types for generation provider interactions.

use serde::{Deserialize, Serialize};

/// Supported generation provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    OpenAI,
    Anthropic,
}

impl ProviderType {
    /// Stable lowercase name, matching the credential-store keys
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => "openai",
            ProviderType::Anthropic => "anthropic",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderType::OpenAI),
            "anthropic" => Ok(ProviderType::Anthropic),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

/// Configuration for a generation provider, assembled per run.
///
/// Credentials are read from the credential store at call time and injected
/// here; adapters never cache them across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The provider type
    pub provider: ProviderType,
    /// API key for the provider
    pub api_key: String,
    /// Model name to use
    pub model: String,
    /// Base URL override (used by tests)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

/// Error types for generation calls.
///
/// Serialized with a `type` tag so per-asset outcomes can cross the wire
/// intact; Display is implemented by hand for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderError {
    /// Authentication failed (invalid or rejected API key)
    AuthenticationFailure { message: String },
    /// Rate limit exceeded
    RateLimited { message: String },
    /// Provider returned an API-level error
    Api {
        message: String,
        status: Option<u16>,
    },
    /// The call hit the per-request timeout
    TimedOut { message: String },
    /// Network/connection error
    Network { message: String },
    /// Response parsing error
    Parse { message: String },
    /// No credential stored for the resolved provider
    MissingCredential { provider: String },
    /// Model id not present in the catalog
    UnknownModel { model: String },
}

impl ProviderError {
    /// Rank used when one failure must represent a whole batch.
    ///
    /// Lower is more specific; pre-dispatch failures outrank anything a
    /// provider can return.
    pub fn specificity(&self) -> u8 {
        match self {
            ProviderError::MissingCredential { .. } => 0,
            ProviderError::UnknownModel { .. } => 1,
            ProviderError::AuthenticationFailure { .. } => 2,
            ProviderError::RateLimited { .. } => 3,
            ProviderError::Api { .. } => 4,
            ProviderError::Parse { .. } => 5,
            ProviderError::TimedOut { .. } => 6,
            ProviderError::Network { .. } => 7,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::AuthenticationFailure { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            ProviderError::RateLimited { message } => {
                write!(f, "Rate limited: {}", message)
            }
            ProviderError::Api { message, status } => {
                if let Some(s) = status {
                    write!(f, "Provider error ({}): {}", s, message)
                } else {
                    write!(f, "Provider error: {}", message)
                }
            }
            ProviderError::TimedOut { message } => {
                write!(f, "Request timed out: {}", message)
            }
            ProviderError::Network { message } => {
                write!(f, "Network error: {}", message)
            }
            ProviderError::Parse { message } => {
                write!(f, "Parse error: {}", message)
            }
            ProviderError::MissingCredential { provider } => {
                write!(f, "No API key configured for {}", provider)
            }
            ProviderError::UnknownModel { model } => {
                write!(f, "Unknown model: {}", model)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Result type for generation calls
pub type ProviderResult<T> = Result<T, ProviderError>;
