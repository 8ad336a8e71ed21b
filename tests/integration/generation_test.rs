//! Generation Pipeline Integration Tests
//!
//! Drives the orchestrator end to end against a mock provider endpoint:
//! fan-out width, all-or-nothing publishing, error surfacing, and
//! supersede-on-new-request behavior.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::RwLock;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use content_remixer::models::generation::{AssetOutcome, GenerateRequest, RunConfig};
use content_remixer::services::{GenerationService, ResultStore, TemplateStore};
use content_remixer::storage::CredentialStore;
use content_remixer::utils::error::AppError;
use remixer_core::{CoreError, TemplateUpdate};
use remixer_llm::{ProviderError, ProviderType};

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    service: Arc<GenerationService>,
    results: Arc<RwLock<ResultStore>>,
    templates: Arc<RwLock<TemplateStore>>,
    _dir: TempDir,
}

fn harness_with_store(credentials: CredentialStore, dir: TempDir) -> Harness {
    let templates = Arc::new(RwLock::new(
        TemplateStore::with_path(dir.path().join("templates.json")).unwrap(),
    ));
    let credentials = Arc::new(RwLock::new(credentials));
    let results = Arc::new(RwLock::new(ResultStore::new()));
    let service = Arc::new(GenerationService::new(
        Arc::clone(&templates),
        Arc::clone(&credentials),
        Arc::clone(&results),
    ));

    Harness {
        service,
        results,
        templates,
        _dir: dir,
    }
}

/// Harness with an OpenAI key already stored
fn harness() -> Harness {
    let dir = TempDir::new().unwrap();
    let mut store = CredentialStore::with_path(dir.path().join("credentials.json")).unwrap();
    store.set_api_key(ProviderType::OpenAI, "sk-test").unwrap();
    harness_with_store(store, dir)
}

/// Harness with no stored credentials
fn harness_without_key() -> Harness {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::with_path(dir.path().join("credentials.json")).unwrap();
    harness_with_store(store, dir)
}

fn run_against(server: &MockServer) -> RunConfig {
    RunConfig {
        model: "gpt-4o-mini".to_string(),
        timeout_secs: 5,
        base_url: Some(server.uri()),
    }
}

fn request(source: &str, assets: &[&str]) -> GenerateRequest {
    GenerateRequest {
        source_text: source.to_string(),
        assets: assets.iter().map(|a| a.to_string()).collect(),
    }
}

fn success_body(text: &str) -> serde_json::Value {
    serde_json::json!({"choices": [{"message": {"content": text}}]})
}

// ============================================================================
// Fan-Out and Publishing
// ============================================================================

#[tokio::test]
async fn test_fan_out_one_call_per_asset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("done")))
        .expect(3)
        .mount(&server)
        .await;

    let h = harness();
    let report = h
        .service
        .generate_all(
            request("Launch day!", &["twitter", "linkedin", "email"]),
            run_against(&server),
        )
        .await
        .unwrap();

    assert!(report.published);
    assert!(report.error.is_none());
    assert_eq!(report.outcomes.len(), 3);
    assert!(report.outcomes.iter().all(|r| r.outcome.is_success()));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_composes_prompt_exactly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Hi!")))
        .mount(&server)
        .await;

    let h = harness();
    h.templates
        .write()
        .await
        .update(
            "twitter",
            TemplateUpdate {
                prompt: Some("Craft a post:".to_string()),
                example: None,
            },
        )
        .unwrap();

    let report = h
        .service
        .generate_all(request("Hello world", &["twitter"]), run_against(&server))
        .await
        .unwrap();
    assert!(report.published);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "Craft a post:\n\n\"Hello world\"");

    let results = h.results.read().await.get_all();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].asset, "twitter");
    assert_eq!(results[0].text, "Hi!");
}

#[tokio::test]
async fn test_published_results_follow_catalog_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("TW prompt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("tweet text")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("EM prompt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("email text")))
        .mount(&server)
        .await;

    let h = harness();
    {
        let mut templates = h.templates.write().await;
        templates
            .update(
                "twitter",
                TemplateUpdate {
                    prompt: Some("TW prompt:".to_string()),
                    example: None,
                },
            )
            .unwrap();
        templates
            .update(
                "email",
                TemplateUpdate {
                    prompt: Some("EM prompt:".to_string()),
                    example: None,
                },
            )
            .unwrap();
    }

    // Selected in reverse catalog order
    let report = h
        .service
        .generate_all(request("News", &["email", "twitter"]), run_against(&server))
        .await
        .unwrap();

    assert!(report.published);
    // Report keeps selection order
    assert_eq!(report.outcomes[0].asset, "email");
    assert_eq!(report.outcomes[1].asset, "twitter");

    // Store serves catalog order
    let results = h.results.read().await.get_all();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].asset, "twitter");
    assert_eq!(results[0].text, "tweet text");
    assert_eq!(results[1].asset, "email");
    assert_eq!(results[1].text, "email text");
}

// ============================================================================
// All-or-Nothing
// ============================================================================

#[tokio::test]
async fn test_failed_call_publishes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("TW prompt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("tweet text")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("EM prompt"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let h = harness();
    {
        let mut templates = h.templates.write().await;
        templates
            .update(
                "twitter",
                TemplateUpdate {
                    prompt: Some("TW prompt:".to_string()),
                    example: None,
                },
            )
            .unwrap();
        templates
            .update(
                "email",
                TemplateUpdate {
                    prompt: Some("EM prompt:".to_string()),
                    example: None,
                },
            )
            .unwrap();
    }

    let report = h
        .service
        .generate_all(request("News", &["twitter", "email"]), run_against(&server))
        .await
        .unwrap();

    assert!(!report.published);
    assert!(matches!(
        report.error,
        Some(ProviderError::RateLimited { .. })
    ));
    assert!(report.outcomes[0].outcome.is_success());
    assert!(matches!(
        report.outcomes[1].outcome,
        AssetOutcome::Failed { .. }
    ));

    // The successful call's text is reported but never stored
    assert!(h.results.read().await.get_all().is_empty());
}

#[tokio::test]
async fn test_most_specific_error_surfaced() {
    let server = MockServer::start().await;
    // twitter fails with a server error, email with a rate limit; the rate
    // limit is the more actionable of the two
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("TW prompt"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("EM prompt"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let h = harness();
    {
        let mut templates = h.templates.write().await;
        templates
            .update(
                "twitter",
                TemplateUpdate {
                    prompt: Some("TW prompt:".to_string()),
                    example: None,
                },
            )
            .unwrap();
        templates
            .update(
                "email",
                TemplateUpdate {
                    prompt: Some("EM prompt:".to_string()),
                    example: None,
                },
            )
            .unwrap();
    }

    let report = h
        .service
        .generate_all(request("News", &["twitter", "email"]), run_against(&server))
        .await
        .unwrap();

    assert!(!report.published);
    match report.error {
        Some(ProviderError::RateLimited { message }) => assert_eq!(message, "quota exceeded"),
        other => panic!("Expected RateLimited, got {:?}", other),
    }
}

// ============================================================================
// Pre-Dispatch Gates
// ============================================================================

#[tokio::test]
async fn test_missing_credential_short_circuits() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("never")))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness_without_key();
    // Stale results from a previous run are cleared when the new run is
    // accepted, even though it fails its credential gate
    h.results
        .write()
        .await
        .replace(HashMap::from([("twitter".to_string(), "old".to_string())]));

    let err = h
        .service
        .generate_all(request("News", &["twitter"]), run_against(&server))
        .await
        .unwrap_err();

    match err {
        AppError::Generation(ProviderError::MissingCredential { provider }) => {
            assert_eq!(provider, "openai");
        }
        other => panic!("Expected MissingCredential, got {:?}", other),
    }
    assert!(h.results.read().await.get_all().is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_model_rejected() {
    let h = harness();
    let run = RunConfig {
        model: "gpt-999".to_string(),
        timeout_secs: 5,
        base_url: None,
    };

    let err = h
        .service
        .generate_all(request("News", &["twitter"]), run)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Generation(ProviderError::UnknownModel { .. })
    ));
    assert_eq!(err.to_string(), "Unknown model: gpt-999");
}

#[tokio::test]
async fn test_unknown_asset_rejects_whole_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("never")))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness();
    let err = h
        .service
        .generate_all(request("News", &["twitter", "zine"]), run_against(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Core(CoreError::UnknownAsset(_))));
    assert_eq!(err.to_string(), "Unknown asset: zine");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_input_rejected_before_store_clear() {
    let h = harness();
    h.results
        .write()
        .await
        .replace(HashMap::from([("twitter".to_string(), "kept".to_string())]));

    let run = RunConfig::new("gpt-4o-mini", 5);
    let err = h
        .service
        .generate_all(request("   \n  ", &["twitter"]), run.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Invalid input: Source text cannot be empty");

    let err = h
        .service
        .generate_all(request("News", &[]), run)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: No assets selected");

    // Rejected requests never reach the run start, so the store survives
    let results = h.results.read().await.get_all();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "kept");
}

// ============================================================================
// Timeouts and Supersede
// ============================================================================

#[tokio::test]
async fn test_call_timeout_maps_to_timed_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let h = harness();
    let run = RunConfig {
        model: "gpt-4o-mini".to_string(),
        timeout_secs: 1,
        base_url: Some(server.uri()),
    };

    let report = h
        .service
        .generate_all(request("News", &["twitter"]), run)
        .await
        .unwrap();

    assert!(!report.published);
    assert!(matches!(report.error, Some(ProviderError::TimedOut { .. })));
    assert!(h.results.read().await.get_all().is_empty());
}

#[tokio::test]
async fn test_newer_run_supersedes_older() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("the slow one"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body("slow"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("the fast one"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("fast")))
        .mount(&server)
        .await;

    let h = harness();
    let run = run_against(&server);

    let first = {
        let service = Arc::clone(&h.service);
        let run = run.clone();
        tokio::spawn(
            async move { service.generate_all(request("the slow one", &["twitter"]), run).await },
        )
    };
    // Let the first batch register and dispatch before superseding it
    tokio::time::sleep(Duration::from_millis(200)).await;

    let second = h
        .service
        .generate_all(request("the fast one", &["twitter"]), run)
        .await
        .unwrap();
    assert!(second.published);

    let first = first.await.unwrap().unwrap();
    assert!(!first.published);
    assert!(first.error.is_none());
    assert!(first.is_superseded());
    assert!(matches!(first.outcomes[0].outcome, AssetOutcome::Cancelled));

    let results = h.results.read().await.get_all();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "fast");
}
