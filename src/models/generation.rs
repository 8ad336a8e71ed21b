//! Generation Models
//!
//! Request, run configuration, and outcome-report types for the
//! generation pipeline.

use serde::{Deserialize, Serialize};

use remixer_llm::ProviderError;

/// Generation request: source text plus the selected asset ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub source_text: String,
    pub assets: Vec<String>,
}

/// Per-run configuration snapshot, built by the caller from the settings
/// store and injected into the orchestrator. The credential is looked up
/// at run time so a key saved mid-session takes effect immediately.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub model: String,
    pub timeout_secs: u64,
    /// Provider base URL override, used by tests to point at a local server
    pub base_url: Option<String>,
}

impl RunConfig {
    pub fn new(model: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            model: model.into(),
            timeout_secs,
            base_url: None,
        }
    }
}

/// Outcome of a single asset's generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetOutcome {
    Success { text: String },
    Failed { error: ProviderError },
    Cancelled,
}

impl AssetOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AssetOutcome::Success { .. })
    }
}

/// One asset's entry in a batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReport {
    pub asset: String,
    pub display_name: String,
    #[serde(flatten)]
    pub outcome: AssetOutcome,
}

/// Full report for one generation batch.
///
/// `outcomes` covers every selected asset in selection order. `published`
/// is true only when every call succeeded and the result store was
/// replaced. `error` carries the most specific failure when the batch did
/// not publish; a superseded batch has `published == false` and no error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<AssetReport>,
    pub published: bool,
    pub error: Option<ProviderError>,
}

impl BatchReport {
    /// Whether a newer run took over before this batch could publish.
    ///
    /// Covers both mid-flight cancellation and the case where every call
    /// succeeded but the run was superseded before the store swap.
    pub fn is_superseded(&self) -> bool {
        !self.published && self.error.is_none()
    }
}

/// One published result, as served by the results endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAsset {
    pub asset: String,
    pub display_name: String,
    pub text: String,
}
