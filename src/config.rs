use std::env;
use std::time::Duration;

pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const COMPLETIONS_MODEL: &str = "text-davinci-003";
pub const COMPLETIONS_MAX_TOKENS: u32 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_PERSONA: &str = "Your name is Buddy, a virtual assistant specialized in \
    giving emotional support, especially to people with suicidal tendencies.";

/// Which provider API the relay talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiStyle {
    Chat,
    /// Legacy prompt/completion endpoint.
    Completions,
}

impl ApiStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStyle::Chat => "chat",
            ApiStyle::Completions => "completions",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "completions" | "completion" | "legacy" => ApiStyle::Completions,
            _ => ApiStyle::Chat,
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            ApiStyle::Chat => CHAT_COMPLETIONS_URL,
            ApiStyle::Completions => COMPLETIONS_URL,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ApiStyle::Chat => CHAT_MODEL,
            ApiStyle::Completions => COMPLETIONS_MODEL,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub openai_key: Option<String>,
    pub api_style: ApiStyle,
    pub openai_url: String,
    pub model: String,
    pub persona: String,
    pub max_tokens: Option<u32>,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_style = var("OPENAI_API_STYLE")
            .map(|v| ApiStyle::parse(&v))
            .unwrap_or(ApiStyle::Chat);

        Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            openai_key: var("OPENAI_KEY"),
            api_style,
            openai_url: var("OPENAI_URL").unwrap_or_else(|| api_style.default_url().to_string()),
            model: var("OPENAI_MODEL").unwrap_or_else(|| api_style.default_model().to_string()),
            persona: var("BUDDY_PERSONA").unwrap_or_else(|| DEFAULT_PERSONA.to_string()),
            max_tokens: var("MAX_TOKENS").and_then(|v| v.parse().ok()),
            // A zero deadline would fail every outbound call.
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
