use crate::config::LlmSettings;
use crate::model::CompletionResponse;
use crate::providers::llm::LlmClient;
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Live completion provider backed by an Ollama server. One synchronous
/// (non-streaming) generate call per triage run; failures surface to the
/// caller and are never retried.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
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
    response: String,
    #[serde(default)]
    model: String,
}

impl OllamaClient {
    pub fn new(settings: &LlmSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<CompletionResponse> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("completion request to {} failed", url))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            anyhow::bail!("completion service returned {}: {}", status, detail);
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .context("completion service returned malformed JSON")?;

        let model = if parsed.model.is_empty() {
            self.model.clone()
        } else {
            parsed.model
        };

        Ok(CompletionResponse {
            text: parsed.response,
            provider: self.provider_name().to_string(),
            model,
            meta: serde_json::json!({ "temperature": self.temperature }),
        })
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }
}
