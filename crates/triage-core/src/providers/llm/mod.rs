use crate::model::CompletionResponse;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<CompletionResponse>;
    fn provider_name(&self) -> &'static str;
}

pub mod fake;
pub mod ollama;
