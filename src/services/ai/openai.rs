use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::LlmProvider;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::ProviderRequest;

/// Outbound leg shared by the chat and legacy completions providers.
pub struct OpenAiTransport {
    api_key: Option<String>,
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiTransport {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_key.clone(),
            url: config.openai_url.clone(),
            timeout: config.request_timeout(),
            client: reqwest::Client::new(),
        }
    }

    pub fn api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Config("OPENAI_KEY undefined".to_string()))
    }

    /// POSTs the payload and reads the whole body. Non-2xx statuses become
    /// [`AppError::Provider`].
    pub async fn send(&self, api_key: &str, payload: Vec<u8>) -> Result<String, AppError> {
        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .body(payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(status = %status, body = %body, "provider response");

        if !status.is_success() {
            tracing::warn!(status = %status, "provider returned non-success status");
            return Err(AppError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

pub struct OpenAiChatProvider {
    model: String,
    persona: String,
    max_tokens: Option<u32>,
    transport: OpenAiTransport,
}

impl OpenAiChatProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            persona: config.persona.clone(),
            max_tokens: config.max_tokens,
            transport: OpenAiTransport::new(config),
        }
    }

    fn prepare_payload(&self, prompt: &str) -> Result<Vec<u8>, AppError> {
        let request = ProviderRequest::new(&self.model, &self.persona, prompt, self.max_tokens);
        serde_json::to_vec(&request).map_err(AppError::Payload)
    }
}

#[async_trait]
impl LlmProvider for OpenAiChatProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self.transport.api_key()?;
        let payload = self.prepare_payload(prompt)?;
        self.transport.send(api_key, payload).await
    }
}
