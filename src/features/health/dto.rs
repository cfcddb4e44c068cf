use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponseDto {
    #[schema(example = "ok")]
    pub status: String,
    pub version: String,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub cached_entries: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PingResponseDto {
    pub pong: bool,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
