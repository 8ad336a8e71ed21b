//! Result Store
//!
//! Holds the latest published generation results (with user edits layered
//! on top) and renders the bulk export artifact. Replaced wholesale on a
//! successful batch, cleared at the start of every run.

use std::collections::HashMap;

use remixer_core::{CoreError, ASSET_CATALOG};

use crate::models::generation::GeneratedAsset;
use crate::utils::error::AppResult;

/// Separator line between an export block's title and body
const EXPORT_SEPARATOR: &str = "-----------------";

/// Export artifact filename
pub const EXPORT_FILENAME: &str = "remixed-content.txt";

/// In-memory store of the latest generation results
#[derive(Debug, Default)]
pub struct ResultStore {
    results: HashMap<String, String>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole store with a new result map
    pub fn replace(&mut self, results: HashMap<String, String>) {
        self.results = results;
    }

    /// Empty the store
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Overwrite one asset's text. The asset must be cataloged; the text
    /// itself is not validated.
    pub fn edit(&mut self, asset_id: &str, text: String) -> AppResult<()> {
        if remixer_core::find_asset(asset_id).is_none() {
            return Err(CoreError::UnknownAsset(asset_id.to_string()).into());
        }
        self.results.insert(asset_id.to_string(), text);
        Ok(())
    }

    /// All current results, in catalog order
    pub fn get_all(&self) -> Vec<GeneratedAsset> {
        ASSET_CATALOG
            .iter()
            .filter_map(|definition| {
                self.results.get(definition.id).map(|text| GeneratedAsset {
                    asset: definition.id.to_string(),
                    display_name: definition.display_name.to_string(),
                    text: text.clone(),
                })
            })
            .collect()
    }

    /// Render every result as one text artifact, in catalog order.
    /// Returns an empty string when the store is empty.
    pub fn export_all(&self) -> String {
        let mut content = String::new();
        for definition in ASSET_CATALOG {
            if let Some(text) = self.results.get(definition.id) {
                content.push_str(definition.display_name);
                content.push('\n');
                content.push_str(EXPORT_SEPARATOR);
                content.push('\n');
                content.push_str(text);
                content.push_str("\n\n");
            }
        }
        content
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
