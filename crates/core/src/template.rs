//! Prompt Templates
//!
//! One template per asset: the instructional prompt plus an optional style
//! example carried over from the early template schema. User overrides are
//! layered over built-in defaults; resolution always yields a template for
//! every cataloged asset.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::asset::is_known_asset;
use crate::error::{CoreError, CoreResult};

/// Prompt template for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Instructional text sent ahead of the source content
    pub prompt: String,
    /// Style exemplar from the early schema; later schemas dropped it,
    /// so deserialization must tolerate its absence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Template {
    /// Create a template with no style example
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            example: None,
        }
    }

    /// Apply a partial update to the template
    pub fn apply_update(&mut self, update: TemplateUpdate) {
        if let Some(prompt) = update.prompt {
            self.prompt = prompt;
        }
        if let Some(example) = update.example {
            self.example = Some(example);
        }
    }
}

/// Template update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateUpdate {
    pub prompt: Option<String>,
    pub example: Option<String>,
}

/// Built-in default prompt for an asset id, if cataloged.
pub fn default_prompt(asset_id: &str) -> Option<&'static str> {
    let prompt = match asset_id {
        "wordpress" => {
            "Please write a WordPress blog post based on the following content, \
             following the style of the example provided. Use clear headings, \
             paragraphs, and a professional tone. Here is the content:"
        }
        "youtube" => {
            "Create a compelling YouTube video description from this content, \
             mirroring the tone of the example. Include a catchy hook, a summary, \
             and relevant keywords. Content:"
        }
        "instagram" => {
            "Generate an engaging Instagram post based on the text below, using \
             the example as a style guide. Make it short, punchy, and include \
             relevant hashtags. Here is the text:"
        }
        "linkedin" => {
            "Write a professional LinkedIn post based on this content and example. \
             Keep it concise and focused on business insights. Original content:"
        }
        "facebook" => {
            "Create a Facebook post from this content, matching the style of the \
             given example. It should be friendly and encourage discussion. Content:"
        }
        "twitter" => {
            "Craft a Twitter/X post (max 280 characters) from this text, following \
             the example format. Make it attention-grabbing. Text:"
        }
        "podcast" => {
            "Write a summary for a podcast show notes page based on this content, \
             styled like the example. Highlight the key topics and takeaways. Content:"
        }
        "email" => {
            "Draft a short email newsletter blurb from this content, using the \
             provided example as a guide. It should be engaging and have a clear \
             call to action. Content:"
        }
        _ => return None,
    };
    Some(prompt)
}

/// Built-in default template for an asset id, if cataloged.
pub fn default_template(asset_id: &str) -> Option<Template> {
    default_prompt(asset_id).map(Template::new)
}

/// User template overrides layered over the built-in defaults.
///
/// Resolution prefers an override with a non-blank prompt; anything else
/// falls back to the default. Every cataloged asset id resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSet {
    overrides: HashMap<String, Template>,
}

impl TemplateSet {
    /// Create an empty set (defaults only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from a persisted override map
    pub fn from_overrides(overrides: HashMap<String, Template>) -> Self {
        Self { overrides }
    }

    /// The current override map, for persistence
    pub fn overrides(&self) -> &HashMap<String, Template> {
        &self.overrides
    }

    /// Whether the asset currently has an effective override
    pub fn is_overridden(&self, asset_id: &str) -> bool {
        self.overrides
            .get(asset_id)
            .is_some_and(|t| !t.prompt.trim().is_empty())
    }

    /// Resolve the effective template for an asset.
    pub fn resolve(&self, asset_id: &str) -> CoreResult<Template> {
        if !is_known_asset(asset_id) {
            return Err(CoreError::unknown_asset(asset_id));
        }
        if let Some(template) = self.overrides.get(asset_id) {
            if !template.prompt.trim().is_empty() {
                return Ok(template.clone());
            }
        }
        default_template(asset_id)
            .ok_or_else(|| CoreError::internal(format!("No default template for {}", asset_id)))
    }

    /// Merge a partial update into the asset's override.
    ///
    /// When no override exists yet, the override is seeded from the
    /// currently resolved template before the update is applied.
    pub fn update(&mut self, asset_id: &str, update: TemplateUpdate) -> CoreResult<Template> {
        let mut template = match self.overrides.get(asset_id) {
            Some(existing) => existing.clone(),
            None => self.resolve(asset_id)?,
        };
        template.apply_update(update);
        self.overrides.insert(asset_id.to_string(), template.clone());
        Ok(template)
    }

    /// Remove the asset's override, reverting to the default.
    pub fn reset(&mut self, asset_id: &str) -> CoreResult<()> {
        if !is_known_asset(asset_id) {
            return Err(CoreError::unknown_asset(asset_id));
        }
        self.overrides.remove(asset_id);
        Ok(())
    }

    /// Remove every override.
    pub fn reset_all(&mut self) {
        self.overrides.clear();
    }
}
