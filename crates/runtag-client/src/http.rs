//! HTTP client for the run tracker REST endpoints.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use runtag_core::{RunId, RunStats, RunSummary};

use crate::error::ClientError;
use crate::lookup::StatsLookup;

/// HTTP client for the run tracker API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL below the base URL.
    ///
    /// Each segment is percent-encoded on its own, so `/`, `?` and `#` inside
    /// a segment never change which resource is addressed.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check if the run tracker is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = self.endpoint(&["health"])?;
        debug!(url = %url, "Checking health");

        let response = self.inner.get(url).send().await?;
        Ok(response.status().is_success())
    }

    /// List runs known to the tracker.
    pub async fn list_runs(&self) -> Result<Vec<RunSummary>, ClientError> {
        self.get_json(&["runs"]).await
    }

    /// Get JSON from the endpoint named by `segments`.
    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "GET request");

        let path = url.path().to_string();
        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path));
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl StatsLookup for HttpClient {
    async fn run_stats(&self, run_id: &RunId) -> Result<RunStats, ClientError> {
        self.get_json(&["runs", run_id.as_str(), "stats"]).await
    }
}
