//! HTTP Client Factory
//!
//! Builds the reqwest client used by providers, applying the configured
//! request timeout so the external round-trip stays bounded.

use std::time::Duration;

/// Build an HTTP client with the given request timeout.
pub fn build_http_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
