pub mod buddy;
pub mod health;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Route table shared by the binary and the integration tests.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/buddy",
            get(buddy::greet)
                .post(buddy::ask)
                .fallback(buddy::method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}
