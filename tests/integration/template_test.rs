//! Template Store Integration Tests
//!
//! Covers the default/override/reset cycle, persistence across reloads,
//! and list views over the full catalog.

use tempfile::TempDir;

use content_remixer::services::TemplateStore;
use remixer_core::{default_prompt, TemplateUpdate, ASSET_CATALOG};

fn store_in(dir: &TempDir) -> TemplateStore {
    TemplateStore::with_path(dir.path().join("templates.json")).unwrap()
}

#[test]
fn test_every_asset_resolves_to_default() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    for asset in ASSET_CATALOG {
        let template = store.resolve(asset.id).unwrap();
        assert_eq!(template.prompt, default_prompt(asset.id).unwrap());
        assert!(template.example.is_none());
    }
}

#[test]
fn test_override_then_reset_restores_default() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store
        .update(
            "twitter",
            TemplateUpdate {
                prompt: Some("Custom tweet prompt:".to_string()),
                example: Some("Short. Punchy.".to_string()),
            },
        )
        .unwrap();

    let overridden = store.resolve("twitter").unwrap();
    assert_eq!(overridden.prompt, "Custom tweet prompt:");
    assert_eq!(overridden.example.as_deref(), Some("Short. Punchy."));

    store.reset("twitter").unwrap();
    let restored = store.resolve("twitter").unwrap();
    assert_eq!(restored.prompt, default_prompt("twitter").unwrap());
    assert!(restored.example.is_none());
}

#[test]
fn test_overrides_survive_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = store_in(&dir);
        store
            .update(
                "email",
                TemplateUpdate {
                    prompt: Some("Custom email prompt:".to_string()),
                    example: None,
                },
            )
            .unwrap();
    }

    let reloaded = store_in(&dir);
    assert_eq!(
        reloaded.resolve("email").unwrap().prompt,
        "Custom email prompt:"
    );
    // Untouched assets still resolve to defaults
    assert_eq!(
        reloaded.resolve("twitter").unwrap().prompt,
        default_prompt("twitter").unwrap()
    );
}

#[test]
fn test_partial_update_keeps_other_field() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store
        .update(
            "podcast",
            TemplateUpdate {
                prompt: Some("First prompt:".to_string()),
                example: Some("An example".to_string()),
            },
        )
        .unwrap();
    store
        .update(
            "podcast",
            TemplateUpdate {
                prompt: Some("Second prompt:".to_string()),
                example: None,
            },
        )
        .unwrap();

    let template = store.resolve("podcast").unwrap();
    assert_eq!(template.prompt, "Second prompt:");
    assert_eq!(template.example.as_deref(), Some("An example"));
}

#[test]
fn test_list_covers_catalog_in_order_with_override_flags() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store
        .update(
            "linkedin",
            TemplateUpdate {
                prompt: Some("Custom:".to_string()),
                example: None,
            },
        )
        .unwrap();

    let views = store.list().unwrap();
    assert_eq!(views.len(), ASSET_CATALOG.len());
    for (view, asset) in views.iter().zip(ASSET_CATALOG) {
        assert_eq!(view.asset, asset.id);
        assert_eq!(view.display_name, asset.display_name);
        assert_eq!(view.overridden, asset.id == "linkedin");
    }
}

#[test]
fn test_reset_all_drops_every_override() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    for asset_id in ["twitter", "email", "wordpress"] {
        store
            .update(
                asset_id,
                TemplateUpdate {
                    prompt: Some(format!("Custom {}:", asset_id)),
                    example: None,
                },
            )
            .unwrap();
    }
    store.reset_all().unwrap();

    let reloaded = store_in(&dir);
    for view in reloaded.list().unwrap() {
        assert!(!view.overridden);
    }
}

#[test]
fn test_unknown_asset_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    assert!(store.resolve("zine").is_err());
    assert!(store
        .update(
            "zine",
            TemplateUpdate {
                prompt: Some("nope".to_string()),
                example: None,
            },
        )
        .is_err());
    assert!(store.reset("zine").is_err());
}
