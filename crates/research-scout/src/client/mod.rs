//! HTTP clients.
//!
//! [`PortalClient`] fetches HTML pages and probes candidate URLs on the
//! research portal and the group site. Requests are issued one at a time;
//! pacing is the caller's job. No retry middleware; the only fallback is
//! moving on to the next candidate URL.

mod ollama;

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::resolve::{ProbeMethod, Prober};

pub use ollama::{LanguageModel, OllamaClient};

/// Research portal HTTP client.
#[derive(Clone)]
pub struct PortalClient {
    /// Underlying HTTP client.
    client: Client,

    /// Timeout for page fetches.
    request_timeout: Duration,

    /// Timeout for existence probes.
    probe_timeout: Duration,
}

impl PortalClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            request_timeout: config.request_timeout,
            probe_timeout: config.probe_timeout,
        })
    }

    /// Fetch a page and return its body.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, or a non-success status.
    pub async fn get_html(&self, url: &str) -> ClientResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.request_timeout))?;

        let response = handle_response(response)?;
        Ok(response.text().await?)
    }

    /// Check that a URL answers 200 to a HEAD request, following redirects.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, or any other status.
    pub async fn head(&self, url: &str) -> ClientResult<()> {
        let response = self
            .client
            .head(url)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.probe_timeout))?;

        require_ok(&response)
    }

    /// Fetch a page for resolution, requiring exactly 200.
    async fn get_probe(&self, url: &str) -> ClientResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.request_timeout))?;

        require_ok(&response)?;
        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl Prober for PortalClient {
    async fn probe(&self, url: &str, method: ProbeMethod) -> ClientResult<Option<String>> {
        match method {
            ProbeMethod::Head => self.head(url).await.map(|()| None),
            ProbeMethod::Get => self.get_probe(url).await.map(Some),
        }
    }
}

impl std::fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient")
            .field("request_timeout", &self.request_timeout)
            .field("probe_timeout", &self.probe_timeout)
            .finish()
    }
}

fn map_send_error(error: reqwest::Error, timeout: Duration) -> ClientError {
    if error.is_timeout() { ClientError::Timeout(timeout) } else { ClientError::Http(error) }
}

/// Resolution only accepts a plain 200.
fn require_ok(response: &reqwest::Response) -> ClientResult<()> {
    if response.status() == StatusCode::OK {
        Ok(())
    } else {
        Err(status_error(response.status(), response.url().as_str()))
    }
}

/// Handle page response status codes.
fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    Err(status_error(status, response.url().as_str()))
}

fn status_error(status: StatusCode, url: &str) -> ClientError {
    match status.as_u16() {
        404 => ClientError::not_found(url),
        500..=599 => ClientError::server(status.as_u16(), url),
        other => ClientError::UnexpectedStatus { status: other, url: url.to_string() },
    }
}
