//! Result Store Integration Tests
//!
//! Covers edit visibility, catalog ordering, and the export artifact
//! format.

use std::collections::HashMap;

use content_remixer::services::ResultStore;

fn store_with(entries: &[(&str, &str)]) -> ResultStore {
    let mut store = ResultStore::new();
    store.replace(
        entries
            .iter()
            .map(|(asset, text)| (asset.to_string(), text.to_string()))
            .collect::<HashMap<_, _>>(),
    );
    store
}

#[test]
fn test_edit_is_visible_in_reads_and_export() {
    let mut store = store_with(&[("twitter", "first draft")]);

    store.edit("twitter", "polished".to_string()).unwrap();

    let results = store.get_all();
    assert_eq!(results[0].text, "polished");
    assert!(store.export_all().contains("polished"));
    assert!(!store.export_all().contains("first draft"));
}

#[test]
fn test_edit_unknown_asset_rejected() {
    let mut store = store_with(&[("twitter", "text")]);
    assert!(store.edit("zine", "nope".to_string()).is_err());
}

#[test]
fn test_edit_accepts_asset_without_result() {
    // Overwrite is unconditional for any cataloged asset
    let mut store = ResultStore::new();
    store.edit("email", "fresh".to_string()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get_all()[0].asset, "email");
}

#[test]
fn test_export_block_format() {
    let store = store_with(&[("twitter", "Hi!")]);
    assert_eq!(
        store.export_all(),
        "Twitter/X Post\n-----------------\nHi!\n\n"
    );
}

#[test]
fn test_export_orders_blocks_by_catalog() {
    // Inserted out of order; export follows the catalog
    let store = store_with(&[("email", "E"), ("wordpress", "W"), ("twitter", "T")]);

    let export = store.export_all();
    let wordpress = export.find("WordPress Post").unwrap();
    let twitter = export.find("Twitter/X Post").unwrap();
    let email = export.find("Email Newsletter Blurb").unwrap();
    assert!(wordpress < twitter);
    assert!(twitter < email);
}

#[test]
fn test_export_empty_store() {
    let store = ResultStore::new();
    assert_eq!(store.export_all(), "");
}

#[test]
fn test_replace_swaps_wholesale() {
    let mut store = store_with(&[("twitter", "old tweet"), ("email", "old email")]);

    store.replace(HashMap::from([(
        "facebook".to_string(),
        "new post".to_string(),
    )]));

    let results = store.get_all();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].asset, "facebook");
}
