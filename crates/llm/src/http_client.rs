//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with a request
//! timeout applied.

use std::time::Duration;

/// Build a `reqwest::Client` with the given request timeout.
///
/// The timeout covers the whole request, connect through body. A run that
/// exceeds it surfaces as `ProviderError::TimedOut` via the transport
/// classifier rather than hanging the whole batch.
pub fn build_http_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .expect("failed to build reqwest client")
}
