use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{HealthResponseDto, PingResponseDto};
use crate::core::error::Result;
use crate::features::prayer_times::PrayerTimeService;
use crate::shared::clock::Clock;
use crate::shared::constants::SERVICE_VERSION;
use crate::shared::types::ApiResponse;

pub struct HealthState {
    pub started_at: Instant,
    pub environment: String,
    pub prayer_times: Arc<PrayerTimeService>,
    pub clock: Arc<dyn Clock>,
}

/// Liveness probe with no dependencies
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service status", body = ApiResponse<HealthResponseDto>)
    ),
    tag = "health"
)]
pub async fn health(
    State(state): State<Arc<HealthState>>,
) -> Result<Json<ApiResponse<HealthResponseDto>>> {
    let dto = HealthResponseDto {
        status: "ok".to_string(),
        version: SERVICE_VERSION.to_string(),
        environment: state.environment.clone(),
        timestamp: state.clock.now(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        cached_entries: state.prayer_times.cached_entries().await,
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/ping",
    responses(
        (status = 200, description = "Pong", body = ApiResponse<PingResponseDto>)
    ),
    tag = "health"
)]
pub async fn ping(State(state): State<Arc<HealthState>>) -> Json<ApiResponse<PingResponseDto>> {
    Json(ApiResponse::success(
        Some(PingResponseDto {
            pong: true,
            timestamp: state.clock.now(),
            version: SERVICE_VERSION.to_string(),
        }),
        None,
        None,
    ))
}
