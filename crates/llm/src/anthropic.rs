//! Anthropic Provider
//!
//! Implementation of the GenerationProvider trait for Anthropic's Messages
//! API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::http_client::build_http_client;
use crate::provider::{parse_http_error, transport_error, GenerationProvider};
use crate::types::{ProviderConfig, ProviderError, ProviderResult};

/// Default Anthropic API base URL
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";

/// API version header required by the Messages API
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Output token cap sent with every request
const MAX_TOKENS: u32 = 2000;

/// Anthropic provider
pub struct AnthropicProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        let client = build_http_client(config.timeout_secs);
        Self { config, client }
    }

    /// Get the messages endpoint, honoring a base URL override
    fn endpoint(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(ANTHROPIC_API_URL);
        format!("{}/v1/messages", base.trim_end_matches('/'))
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "max_tokens": MAX_TOKENS,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
        })
    }

    /// Extract the generated text from a parsed response
    fn extract_text(response: MessagesResponse) -> ProviderResult<String> {
        response
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| ProviderError::Parse {
                message: "Response contained no text content".to_string(),
            })
    }
}

#[async_trait]
impl GenerationProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        let body = self.build_request_body(prompt);

        let url = self.endpoint();
        tracing::debug!("Anthropic generate POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(transport_error)?;

        if status != 200 {
            tracing::warn!(
                "Anthropic API error: HTTP {} from {}: {}",
                status,
                url,
                body_text
            );
            return Err(parse_http_error(status, &body_text, "anthropic"));
        }

        let messages: MessagesResponse =
            serde_json::from_str(&body_text).map_err(|e| ProviderError::Parse {
                message: format!("Failed to parse response: {}", e),
            })?;

        Self::extract_text(messages)
    }
}

/// Anthropic API response format
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}
