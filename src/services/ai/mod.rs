pub mod completions;
pub mod decode;
pub mod openai;

use async_trait::async_trait;

use crate::errors::AppError;

/// Anything that can turn a prompt into a provider reply.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends the prompt and returns the provider's raw response body.
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;

    /// Pulls the reply text out of a raw body returned by [`LlmProvider::complete`].
    fn extract_reply(&self, raw: &str) -> Result<String, AppError> {
        decode::chat_reply(raw)
    }
}
