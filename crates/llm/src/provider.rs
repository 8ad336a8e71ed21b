//! Generation Provider Trait
//!
//! Defines the common interface for all generation providers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::anthropic::AnthropicProvider;
use crate::openai::OpenAIProvider;
use crate::types::{ProviderConfig, ProviderError, ProviderResult, ProviderType};

/// Trait that all generation providers must implement.
///
/// One call transforms one composed prompt into generated text. Providers
/// carry their configuration (key, model, timeout) for the duration of a
/// single run only.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send a composed prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> ProviderResult<String>;
}

/// Create a generation provider from a ProviderConfig.
///
/// Factory function that maps ProviderType to the concrete provider
/// implementation.
pub fn create_provider(config: ProviderConfig) -> Arc<dyn GenerationProvider> {
    match config.provider {
        ProviderType::OpenAI => Arc::new(OpenAIProvider::new(config)),
        ProviderType::Anthropic => Arc::new(AnthropicProvider::new(config)),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> ProviderError {
    match status {
        401 => ProviderError::AuthenticationFailure {
            message: format!("{}: Invalid API key", provider),
        },
        403 => ProviderError::AuthenticationFailure {
            message: format!("{}: Access denied", provider),
        },
        429 => ProviderError::RateLimited {
            message: body.to_string(),
        },
        400 => ProviderError::Api {
            message: body.to_string(),
            status: Some(400),
        },
        500..=599 => ProviderError::Api {
            message: body.to_string(),
            status: Some(status),
        },
        _ => ProviderError::Api {
            message: format!("HTTP {}: {}", status, body),
            status: Some(status),
        },
    }
}

/// Helper function to classify reqwest transport failures
pub fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::TimedOut {
            message: err.to_string(),
        }
    } else {
        ProviderError::Network {
            message: err.to_string(),
        }
    }
}
