//! Settings Integration Tests
//!
//! Covers first-run defaults, partial updates, validation, and reset
//! behavior of the on-disk config.

use tempfile::TempDir;

use content_remixer::models::settings::SettingsUpdate;
use content_remixer::storage::ConfigService;
use remixer_llm::DEFAULT_MODEL;

fn service_in(dir: &TempDir) -> ConfigService {
    ConfigService::with_path(dir.path().join("config.json")).unwrap()
}

#[test]
fn test_first_run_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let config = service.get_config();
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.request_timeout_secs, 60);
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_partial_update_persists_across_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut service = service_in(&dir);
        let updated = service
            .update_config(SettingsUpdate {
                model: Some("claude-3-5-haiku-20241022".to_string()),
                request_timeout_secs: None,
            })
            .unwrap();
        assert_eq!(updated.model, "claude-3-5-haiku-20241022");
        // Untouched field keeps its value
        assert_eq!(updated.request_timeout_secs, 60);
    }

    let reloaded = service_in(&dir);
    assert_eq!(reloaded.get_config().model, "claude-3-5-haiku-20241022");
}

#[test]
fn test_invalid_update_rejected_and_state_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut service = service_in(&dir);

    let err = service
        .update_config(SettingsUpdate {
            model: Some("gpt-999".to_string()),
            request_timeout_secs: None,
        })
        .unwrap_err();
    assert!(err.to_string().contains("Unknown model: gpt-999"));
    assert_eq!(service.get_config().model, DEFAULT_MODEL);

    let err = service
        .update_config(SettingsUpdate {
            model: None,
            request_timeout_secs: Some(2),
        })
        .unwrap_err();
    assert!(err.to_string().contains("timeout"));
    assert_eq!(service.get_config().request_timeout_secs, 60);
}

#[test]
fn test_reset_restores_defaults_on_disk() {
    let dir = TempDir::new().unwrap();
    {
        let mut service = service_in(&dir);
        service
            .update_config(SettingsUpdate {
                model: Some("gpt-4o".to_string()),
                request_timeout_secs: Some(120),
            })
            .unwrap();
        let config = service.reset().unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    let reloaded = service_in(&dir);
    assert_eq!(reloaded.get_config().model, DEFAULT_MODEL);
    assert_eq!(reloaded.get_config().request_timeout_secs, 60);
}
