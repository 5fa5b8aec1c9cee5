//! HTTP transport abstraction for testability

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

const USER_AGENT: &str = "github-badge/0.1.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw result of a GET request, before any interpretation
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over the HTTP layer for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Production transport backed by reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
