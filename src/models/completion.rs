use serde::{Deserialize, Serialize};

use super::Usage;

/// Legacy completions payload. The persona is prepended to the prompt text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(model: &str, persona: &str, prompt: &str, max_tokens: u32) -> Self {
        Self {
            prompt: format!("{persona}\n{prompt}"),
            model: model.to_string(),
            max_tokens,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompletionResponse {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: Option<i64>,
    pub model: Option<String>,
    pub choices: Vec<CompletionChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompletionChoice {
    pub text: String,
    pub index: u32,
    pub logprobs: Option<serde_json::Value>,
    pub finish_reason: Option<String>,
}
