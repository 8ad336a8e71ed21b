//! Generation Orchestrator
//!
//! Drives one batch per request: validates input, supersedes any in-flight
//! batch, gates on model and credential, composes one prompt per selected
//! asset, fans the provider calls out concurrently, and publishes the
//! results all-or-nothing.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use remixer_core::{catalog_position, compose_prompt, find_asset, CoreError};
use remixer_llm::{create_provider, provider_for_model, ProviderConfig, ProviderError};

use crate::models::generation::{
    AssetOutcome, AssetReport, BatchReport, GenerateRequest, RunConfig,
};
use crate::services::results::ResultStore;
use crate::services::templates::TemplateStore;
use crate::storage::credentials::CredentialStore;
use crate::utils::error::{AppError, AppResult};

/// One composed call, ready for dispatch
struct Job {
    asset: String,
    display_name: String,
    prompt: String,
}

/// Orchestrates generation batches over the shared stores
pub struct GenerationService {
    templates: Arc<RwLock<TemplateStore>>,
    credentials: Arc<RwLock<CredentialStore>>,
    results: Arc<RwLock<ResultStore>>,
    /// Token of the in-flight batch. Starting a new batch cancels the
    /// previous token; publish re-checks it under this lock.
    current_run: Mutex<Option<CancellationToken>>,
}

impl GenerationService {
    pub fn new(
        templates: Arc<RwLock<TemplateStore>>,
        credentials: Arc<RwLock<CredentialStore>>,
        results: Arc<RwLock<ResultStore>>,
    ) -> Self {
        Self {
            templates,
            credentials,
            results,
            current_run: Mutex::new(None),
        }
    }

    /// Run one generation batch.
    ///
    /// Pre-dispatch rejections (blank input, unknown model or asset,
    /// missing credential) return `Err` without any provider call. A
    /// dispatched batch always returns `Ok` with the full per-asset
    /// report; `published` is true only when every call succeeded and the
    /// batch was not superseded.
    pub async fn generate_all(
        &self,
        request: GenerateRequest,
        run: RunConfig,
    ) -> AppResult<BatchReport> {
        if request.source_text.trim().is_empty() {
            return Err(AppError::invalid_input("Source text cannot be empty"));
        }
        if request.assets.is_empty() {
            return Err(AppError::invalid_input("No assets selected"));
        }

        // Supersede any in-flight batch and clear the store. Both happen
        // under the run lock so a stale batch cannot clear results that a
        // newer batch already published.
        let token = CancellationToken::new();
        {
            let mut current = self.current_run.lock().await;
            if let Some(previous) = current.replace(token.clone()) {
                previous.cancel();
            }
            self.results.write().await.clear();
        }

        let provider_type =
            provider_for_model(&run.model).ok_or_else(|| ProviderError::UnknownModel {
                model: run.model.clone(),
            })?;
        let api_key = self
            .credentials
            .read()
            .await
            .get_api_key(provider_type)
            .ok_or_else(|| ProviderError::MissingCredential {
                provider: provider_type.as_str().to_string(),
            })?;

        // Resolve every template before any network call; an unknown
        // asset aborts the whole batch.
        let mut jobs = Vec::with_capacity(request.assets.len());
        {
            let templates = self.templates.read().await;
            for asset_id in &request.assets {
                let definition = find_asset(asset_id)
                    .ok_or_else(|| CoreError::UnknownAsset(asset_id.clone()))?;
                let template = templates.resolve(asset_id)?;
                let prompt =
                    compose_prompt(&template, definition.display_name, &request.source_text);
                jobs.push(Job {
                    asset: asset_id.clone(),
                    display_name: definition.display_name.to_string(),
                    prompt,
                });
            }
        }

        let provider = create_provider(ProviderConfig {
            provider: provider_type,
            api_key,
            model: run.model.clone(),
            base_url: run.base_url.clone(),
            timeout_secs: run.timeout_secs,
        });

        tracing::info!(
            model = %run.model,
            assets = jobs.len(),
            "dispatching generation batch"
        );

        // One call per asset, all in flight at once, each racing the
        // batch token
        let mut calls = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let provider = Arc::clone(&provider);
            let token = token.clone();
            let asset = job.asset.clone();
            let prompt = job.prompt.clone();
            calls.push(async move {
                tokio::select! {
                    _ = token.cancelled() => AssetOutcome::Cancelled,
                    result = provider.generate(&prompt) => match result {
                        Ok(text) => AssetOutcome::Success { text },
                        Err(error) => {
                            tracing::warn!(asset = %asset, error = %error, "generation call failed");
                            AssetOutcome::Failed { error }
                        }
                    },
                }
            });
        }

        let outcomes = join_all(calls).await;

        // Reports keep selection order
        let reports: Vec<AssetReport> = jobs
            .into_iter()
            .zip(outcomes)
            .map(|(job, outcome)| AssetReport {
                asset: job.asset,
                display_name: job.display_name,
                outcome,
            })
            .collect();

        let error = Self::most_specific_error(&reports);
        let all_success = reports.iter().all(|r| r.outcome.is_success());

        let mut published = false;
        if all_success {
            let _guard = self.current_run.lock().await;
            if token.is_cancelled() {
                tracing::info!("batch superseded before publish, results dropped");
            } else {
                let results: HashMap<String, String> = reports
                    .iter()
                    .filter_map(|r| match &r.outcome {
                        AssetOutcome::Success { text } => Some((r.asset.clone(), text.clone())),
                        _ => None,
                    })
                    .collect();
                self.results.write().await.replace(results);
                published = true;
                tracing::info!(assets = reports.len(), "published generation results");
            }
        }

        Ok(BatchReport {
            outcomes: reports,
            published,
            error,
        })
    }

    /// Pick the single error a failed batch surfaces: lowest specificity
    /// rank wins, ties broken by catalog order.
    fn most_specific_error(reports: &[AssetReport]) -> Option<ProviderError> {
        reports
            .iter()
            .filter_map(|r| match &r.outcome {
                AssetOutcome::Failed { error } => catalog_position(&r.asset)
                    .map(|position| (error.specificity(), position, error)),
                _ => None,
            })
            .min_by_key(|(specificity, position, _)| (*specificity, *position))
            .map(|(_, _, error)| error.clone())
    }
}
