//! Local language model client (Ollama `/api/generate`).

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ScoutError, ScoutResult};

/// A text generation backend.
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete a prompt and return the raw response text.
    async fn generate(&self, prompt: &str) -> ScoutResult<String>;
}

/// Non-streaming client for an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    /// Generation can take minutes on CPU-only hosts.
    const TIMEOUT: Duration = Duration::from_secs(600);

    /// Create a client for `model` served at `base_url`.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Self::TIMEOUT).build()?;
        Ok(Self { client, base_url: base_url.into(), model: model.into() })
    }

    /// Model name sent with every request.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LanguageModel for OllamaClient {
    async fn generate(&self, prompt: &str) -> ScoutResult<String> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions { temperature: 0.0 },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ScoutError::model(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::model(format!("{url} returned {status}: {body}")));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::model(format!("malformed response from {url}: {e}")))?;

        Ok(body.response)
    }
}
