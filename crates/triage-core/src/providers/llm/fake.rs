use crate::model::CompletionResponse;
use crate::providers::llm::LlmClient;
use async_trait::async_trait;

/// Canned-response client for tests and offline runs.
#[derive(Clone)]
pub struct FakeClient {
    text: String,
    fail: bool,
}

impl FakeClient {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fail: false,
        }
    }

    /// A client whose every call fails, for exercising the error path.
    pub fn failing() -> Self {
        Self {
            text: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<CompletionResponse> {
        if self.fail {
            anyhow::bail!("fake completion failure");
        }
        Ok(CompletionResponse {
            text: self.text.clone(),
            provider: self.provider_name().to_string(),
            model: "fake".to_string(),
            meta: serde_json::json!({ "fake": true }),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
