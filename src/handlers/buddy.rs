use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::errors::AppError;
use crate::state::AppState;

pub const GREETING: &str = "Welcome to Lifeline Buddy!";
pub const ALLOWED_METHODS: &str = "GET, HEAD, POST";

// GET /buddy
pub async fn greet() -> &'static str {
    GREETING
}

// POST /buddy
pub async fn ask(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<String>, AppError> {
    let body = body?;
    if body.is_empty() {
        return Err(AppError::EmptyBody);
    }

    let prompt = std::str::from_utf8(&body)
        .map_err(|e| AppError::InvalidBody(format!("body is not valid UTF-8: {e}")))?;

    tracing::info!(prompt_bytes = body.len(), "relaying prompt");

    let raw = state.llm.complete(prompt).await?;
    let reply = state.llm.extract_reply(&raw)?;

    Ok(Json(reply))
}

pub async fn method_not_allowed(method: Method) -> Response {
    (
        [(header::ALLOW, ALLOWED_METHODS)],
        AppError::MethodNotAllowed(format!("method {method} not allowed on /buddy")),
    )
        .into_response()
}
