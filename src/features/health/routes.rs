use std::sync::Arc;

use axum::{routing::get, Router};

use super::handler::{self, HealthState};

pub fn routes(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/health", get(handler::liveness))
        .route("/api/health", get(handler::health))
        .route("/api/ping", get(handler::ping))
        .with_state(state)
}
