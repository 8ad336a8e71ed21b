//! OpenAI Provider
//!
//! Implementation of the GenerationProvider trait for OpenAI's chat
//! completions API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::http_client::build_http_client;
use crate::provider::{parse_http_error, transport_error, GenerationProvider};
use crate::types::{ProviderConfig, ProviderError, ProviderResult};

/// Default OpenAI API base URL
const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Sampling temperature sent with every request
const TEMPERATURE: f64 = 0.7;

/// OpenAI provider
pub struct OpenAIProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        let client = build_http_client(config.timeout_secs);
        Self { config, client }
    }

    /// Get the chat completions endpoint, honoring a base URL override
    fn endpoint(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(OPENAI_API_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": TEMPERATURE,
        })
    }

    /// Extract the generated text from a parsed response
    fn extract_text(response: ChatCompletionResponse) -> ProviderResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Parse {
                message: "Response contained no message content".to_string(),
            })
    }
}

#[async_trait]
impl GenerationProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        let body = self.build_request_body(prompt);

        let url = self.endpoint();
        tracing::debug!("OpenAI generate POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(transport_error)?;

        if status != 200 {
            tracing::warn!("OpenAI API error: HTTP {} from {}: {}", status, url, body_text);
            return Err(parse_http_error(status, &body_text, "openai"));
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&body_text).map_err(|e| ProviderError::Parse {
                message: format!("Failed to parse response: {}", e),
            })?;

        Self::extract_text(completion)
    }
}

/// OpenAI API response format
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
