use async_trait::async_trait;

use super::openai::OpenAiTransport;
use super::{decode, LlmProvider};
use crate::config::{AppConfig, COMPLETIONS_MAX_TOKENS};
use crate::errors::AppError;
use crate::models::CompletionRequest;

/// Provider for the legacy prompt/completion endpoint.
pub struct OpenAiCompletionsProvider {
    model: String,
    persona: String,
    max_tokens: u32,
    transport: OpenAiTransport,
}

impl OpenAiCompletionsProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            persona: config.persona.clone(),
            max_tokens: config.max_tokens.unwrap_or(COMPLETIONS_MAX_TOKENS),
            transport: OpenAiTransport::new(config),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompletionsProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self.transport.api_key()?;
        let request = CompletionRequest::new(&self.model, &self.persona, prompt, self.max_tokens);
        let payload = serde_json::to_vec(&request).map_err(AppError::Payload)?;
        self.transport.send(api_key, payload).await
    }

    fn extract_reply(&self, raw: &str) -> Result<String, AppError> {
        decode::completion_reply(raw)
    }
}
