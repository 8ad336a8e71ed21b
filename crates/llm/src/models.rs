//! Model Catalog
//!
//! Fixed table of selectable models and the provider each one routes to.
//! Model selection is validated against this table before any request is
//! dispatched, so a stale or mistyped model id fails fast instead of
//! burning a round trip per asset.

use serde::Serialize;

use crate::types::ProviderType;

/// A selectable model and its owning provider.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelDefinition {
    pub id: &'static str,
    pub provider: ProviderType,
}

/// Model used when no selection has been saved.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// All selectable models, grouped by provider.
pub const MODEL_CATALOG: &[ModelDefinition] = &[
    ModelDefinition {
        id: "gpt-4o",
        provider: ProviderType::OpenAI,
    },
    ModelDefinition {
        id: "gpt-4o-mini",
        provider: ProviderType::OpenAI,
    },
    ModelDefinition {
        id: "gpt-4-turbo",
        provider: ProviderType::OpenAI,
    },
    ModelDefinition {
        id: "gpt-3.5-turbo",
        provider: ProviderType::OpenAI,
    },
    ModelDefinition {
        id: "claude-sonnet-4-20250514",
        provider: ProviderType::Anthropic,
    },
    ModelDefinition {
        id: "claude-3-5-sonnet-20241022",
        provider: ProviderType::Anthropic,
    },
    ModelDefinition {
        id: "claude-3-5-haiku-20241022",
        provider: ProviderType::Anthropic,
    },
];

/// Look up the provider that serves `model`, or None if the model is not
/// in the catalog.
pub fn provider_for_model(model: &str) -> Option<ProviderType> {
    MODEL_CATALOG
        .iter()
        .find(|m| m.id == model)
        .map(|m| m.provider)
}

/// Whether `model` appears in the catalog.
pub fn is_known_model(model: &str) -> bool {
    provider_for_model(model).is_some()
}

/// All model ids served by `provider`, in catalog order.
pub fn models_for_provider(provider: ProviderType) -> Vec<&'static str> {
    MODEL_CATALOG
        .iter()
        .filter(|m| m.provider == provider)
        .map(|m| m.id)
        .collect()
}
