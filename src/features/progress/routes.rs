use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::progress::handlers;
use crate::features::progress::services::ProgressService;

/// Routes for prayer progress; mount behind the JWT auth middleware
pub fn routes(service: Arc<ProgressService>) -> Router {
    Router::new()
        .route("/api/user/progress", get(handlers::get_progress))
        .route("/api/user/prayer", post(handlers::record_prayer))
        .route("/api/user/location", put(handlers::update_location))
        .with_state(service)
}
