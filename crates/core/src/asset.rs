//! Asset Catalog
//!
//! The static catalog of target output formats. Fixed at compile time;
//! the declared order is the presentation and export order everywhere.

use serde::Serialize;

/// One target output format in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetDefinition {
    /// Stable identifier used in requests, templates, and results
    pub id: &'static str,
    /// Human-readable name, substituted into prompts and export headings
    pub display_name: &'static str,
}

/// All selectable assets, in declared order.
pub const ASSET_CATALOG: &[AssetDefinition] = &[
    AssetDefinition {
        id: "wordpress",
        display_name: "WordPress Post",
    },
    AssetDefinition {
        id: "youtube",
        display_name: "YouTube Video Description",
    },
    AssetDefinition {
        id: "instagram",
        display_name: "Instagram & TikTok Post",
    },
    AssetDefinition {
        id: "linkedin",
        display_name: "LinkedIn Post",
    },
    AssetDefinition {
        id: "facebook",
        display_name: "Facebook Post",
    },
    AssetDefinition {
        id: "twitter",
        display_name: "Twitter/X Post",
    },
    AssetDefinition {
        id: "podcast",
        display_name: "Podcast Page",
    },
    AssetDefinition {
        id: "email",
        display_name: "Email Newsletter Blurb",
    },
];

/// Look up an asset by id.
pub fn find_asset(id: &str) -> Option<&'static AssetDefinition> {
    ASSET_CATALOG.iter().find(|asset| asset.id == id)
}

/// Whether the id belongs to the catalog.
pub fn is_known_asset(id: &str) -> bool {
    find_asset(id).is_some()
}

/// Position of an asset in the declared order.
pub fn catalog_position(id: &str) -> Option<usize> {
    ASSET_CATALOG.iter().position(|asset| asset.id == id)
}

/// Display name for an asset id, if cataloged.
pub fn display_name(id: &str) -> Option<&'static str> {
    find_asset(id).map(|asset| asset.display_name)
}
