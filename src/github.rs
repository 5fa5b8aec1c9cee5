use crate::error::Result;
use crate::http::{HttpTransport, ReqwestTransport, DEFAULT_TIMEOUT};
use crate::types::RepoMetrics;
use std::time::Duration;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubClient {
    transport: Box<dyn HttpTransport>,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let transport = ReqwestTransport::new(timeout)?;
        Self::with_transport(Box::new(transport), base_url)
    }

    /// Build a client over an arbitrary transport. The base URL is validated
    /// here so a bad one fails construction rather than every fetch.
    pub fn with_transport(transport: Box<dyn HttpTransport>, base_url: &str) -> Result<Self> {
        Url::parse(base_url)?;

        Ok(GitHubClient {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the star and fork counters for a repository.
    ///
    /// Status codes are not inspected: whatever body came back is decoded as
    /// JSON, with absent counters defaulting to zero. Only a transport
    /// failure or a body that is not JSON at all is an error.
    pub async fn repo_metrics(&self, owner: &str, repo: &str) -> Result<RepoMetrics> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);
        let response = self.transport.get(&url).await?;
        let metrics: RepoMetrics = serde_json::from_str(&response.body)?;

        tracing::debug!(
            owner,
            repo,
            status = response.status,
            stars = metrics.stargazers_count,
            forks = metrics.forks_count,
            "fetched repository metrics"
        );

        Ok(metrics)
    }
}
