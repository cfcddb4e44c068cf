use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::prayer_times::handlers;
use crate::features::prayer_times::services::PrayerTimeService;

/// Create routes for the prayer times feature
pub fn routes(service: Arc<PrayerTimeService>) -> Router {
    Router::new()
        .route(
            "/api/prayer-times/by-coordinates",
            get(handlers::get_prayer_times_by_coordinates),
        )
        .route(
            "/api/prayer-times/{zone_code}",
            get(handlers::get_prayer_times),
        )
        .with_state(service)
}
