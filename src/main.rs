use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use buddy::config::{ApiStyle, AppConfig};
use buddy::handlers;
use buddy::services::ai::completions::OpenAiCompletionsProvider;
use buddy::services::ai::openai::OpenAiChatProvider;
use buddy::services::ai::LlmProvider;
use buddy::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    anyhow::ensure!(config.openai_key.is_some(), "OPENAI_KEY must be set");

    let llm: Box<dyn LlmProvider> = match config.api_style {
        ApiStyle::Chat => Box::new(OpenAiChatProvider::new(&config)),
        ApiStyle::Completions => Box::new(OpenAiCompletionsProvider::new(&config)),
    };
    tracing::info!(
        style = config.api_style.as_str(),
        model = %config.model,
        url = %config.openai_url,
        "using OpenAI provider"
    );

    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState { config, llm });

    let app = handlers::router(state).layer(TraceLayer::new_for_http());

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
