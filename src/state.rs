use crate::config::AppConfig;
use crate::services::ai::LlmProvider;

pub struct AppState {
    pub config: AppConfig,
    pub llm: Box<dyn LlmProvider>,
}
