use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::zones::handlers;
use crate::features::zones::services::ZoneResolver;

/// Create routes for the zones feature
pub fn routes(resolver: Arc<ZoneResolver>) -> Router {
    Router::new()
        .route("/api/zones", get(handlers::list_zones))
        // Lookup must be registered alongside {code}; static segments win
        .route(
            "/api/zones/from-coordinates",
            get(handlers::zone_from_coordinates),
        )
        .route("/api/zones/{code}", get(handlers::get_zone))
        .with_state(resolver)
}
