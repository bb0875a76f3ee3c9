//! HTTP client for the classifier service.

use anyhow::{Context, Result};
use senti_core::{AnalysisRequest, AnalysisResponse};
use std::time::Duration;
use tracing::debug;

/// Service URL used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Upper bound on one analyze call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Classifier service client. No retries: a failed call is reported as is.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one sentence to `POST /analyze`.
    pub async fn analyze(&self, sentence: &str) -> Result<AnalysisResponse> {
        let request = AnalysisRequest::new(sentence);

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to reach the sentiment service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Sentiment service error ({}): {}", status, body);
        }

        let result: AnalysisResponse = response
            .json()
            .await
            .context("Failed to parse sentiment service response")?;

        debug!(sentiment = %result.sentiment, "Received analysis");

        Ok(result)
    }

    /// Check whether the service answers its health probe.
    pub async fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => Ok(true),
            _ => Ok(false),
        }
    }
}
