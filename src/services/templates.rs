//! Template Store
//!
//! Resolves per-asset prompt templates (built-in defaults layered under
//! user overrides) and persists the overrides to disk on every mutation.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use remixer_core::{Template, TemplateSet, TemplateUpdate, ASSET_CATALOG};

use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_remixer_dir, templates_path};

/// One catalog entry with its resolved template, as served by the
/// templates endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateView {
    pub asset: String,
    pub display_name: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub overridden: bool,
}

/// Template store with file-backed overrides
#[derive(Debug)]
pub struct TemplateStore {
    path: PathBuf,
    templates: TemplateSet,
}

impl TemplateStore {
    /// Create a new template store, loading existing overrides or creating
    /// an empty overrides file
    pub fn new() -> AppResult<Self> {
        ensure_remixer_dir()?;
        Self::with_path(templates_path()?)
    }

    /// Create a template store backed by an explicit file path
    pub fn with_path(path: PathBuf) -> AppResult<Self> {
        let templates = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let overrides: HashMap<String, Template> = serde_json::from_str(&content)?;
            TemplateSet::from_overrides(overrides)
        } else {
            let set = TemplateSet::new();
            Self::save_to_file(&path, &set)?;
            set
        };

        Ok(Self { path, templates })
    }

    fn save_to_file(path: &PathBuf, templates: &TemplateSet) -> AppResult<()> {
        let content = serde_json::to_string_pretty(templates.overrides())?;
        fs::write(path, content)?;
        Ok(())
    }

    fn save(&self) -> AppResult<()> {
        Self::save_to_file(&self.path, &self.templates)
    }

    /// Resolve the effective template for an asset id
    pub fn resolve(&self, asset_id: &str) -> AppResult<Template> {
        Ok(self.templates.resolve(asset_id)?)
    }

    /// Resolved template for every catalog asset, in catalog order
    pub fn list(&self) -> AppResult<Vec<TemplateView>> {
        let mut views = Vec::with_capacity(ASSET_CATALOG.len());
        for definition in ASSET_CATALOG {
            let template = self.templates.resolve(definition.id)?;
            views.push(TemplateView {
                asset: definition.id.to_string(),
                display_name: definition.display_name.to_string(),
                prompt: template.prompt,
                example: template.example,
                overridden: self.templates.is_overridden(definition.id),
            });
        }
        Ok(views)
    }

    /// Merge partial fields into an asset's override and persist
    pub fn update(&mut self, asset_id: &str, update: TemplateUpdate) -> AppResult<Template> {
        let merged = self.templates.update(asset_id, update)?;
        self.save()?;
        Ok(merged)
    }

    /// Remove an asset's override, reverting to the built-in default
    pub fn reset(&mut self, asset_id: &str) -> AppResult<()> {
        self.templates.reset(asset_id)?;
        self.save()?;
        Ok(())
    }

    /// Remove every override
    pub fn reset_all(&mut self) -> AppResult<()> {
        self.templates.reset_all();
        self.save()?;
        Ok(())
    }

    /// Check if the template store is healthy
    pub fn is_healthy(&self) -> bool {
        self.path.exists()
    }
}
