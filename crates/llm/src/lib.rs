//! Remixer LLM
//!
//! Provides a unified interface for the generation providers the remixer
//! can dispatch to:
//! - OpenAI (chat completions)
//! - Anthropic Claude (messages)
//!
//! Also includes the model catalog and the HTTP client factory.

pub mod anthropic;
pub mod http_client;
pub mod models;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use anthropic::AnthropicProvider;
pub use http_client::build_http_client;
pub use models::{
    is_known_model, models_for_provider, provider_for_model, ModelDefinition, DEFAULT_MODEL,
    MODEL_CATALOG,
};
pub use openai::OpenAIProvider;
pub use provider::{create_provider, parse_http_error, transport_error, GenerationProvider};
pub use types::*;
