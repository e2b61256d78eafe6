use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("failed to read request body: {}", .0.body_text())]
    BodyRejected(#[from] BytesRejection),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to serialize provider request: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no choices in the response")]
    EmptyResult,

    #[error("{0}")]
    MethodNotAllowed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BodyRejected(rejection) => rejection.status(),
            AppError::EmptyBody => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config(_)
            | AppError::Payload(_)
            | AppError::Transport(_)
            | AppError::Provider { .. }
            | AppError::Decode(_)
            | AppError::EmptyResult => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "relay request failed");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
