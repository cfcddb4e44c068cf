use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::prayer_times::dtos::CoordinatePrayerTimesDto;
use crate::features::prayer_times::models::PrayerTimeRecord;
use crate::features::prayer_times::services::PrayerTimeService;
use crate::features::zones::dtos::CoordinateQuery;
use crate::shared::types::ApiResponse;
use crate::shared::validation::normalize_zone_code;

/// Get today's prayer times for a zone
///
/// Served from cache when fresh, otherwise from JAKIM. When JAKIM cannot be
/// reached the response carries static times with `source = fallback-cached`.
#[utoipa::path(
    get,
    path = "/api/prayer-times/{zone_code}",
    params(
        ("zone_code" = String, Path, description = "JAKIM zone code, 3-10 letters or digits")
    ),
    responses(
        (status = 200, description = "Prayer times for today", body = ApiResponse<PrayerTimeRecord>),
        (status = 400, description = "Malformed zone code")
    ),
    tag = "prayer-times"
)]
pub async fn get_prayer_times(
    State(service): State<Arc<PrayerTimeService>>,
    Path(zone_code): Path<String>,
) -> Result<Json<ApiResponse<PrayerTimeRecord>>> {
    let zone_code = normalize_zone_code(&zone_code).ok_or_else(|| {
        AppError::BadRequest("Zone code must be 3-10 letters or digits".to_string())
    })?;

    let record = service.prayer_times_for_zone(&zone_code).await;

    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

/// Get today's prayer times for coordinates
#[utoipa::path(
    get,
    path = "/api/prayer-times/by-coordinates",
    params(CoordinateQuery),
    responses(
        (status = 200, description = "Prayer times for the resolved zone", body = ApiResponse<CoordinatePrayerTimesDto>),
        (status = 400, description = "Coordinates missing, not numeric, or outside Malaysia")
    ),
    tag = "prayer-times"
)]
pub async fn get_prayer_times_by_coordinates(
    State(service): State<Arc<PrayerTimeService>>,
    AppQuery(query): AppQuery<CoordinateQuery>,
) -> Result<Json<ApiResponse<CoordinatePrayerTimesDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let coordinates = query.coordinate();
    let (_, record) = service.prayer_times_for_coordinates(coordinates).await;

    Ok(Json(ApiResponse::success(
        Some(CoordinatePrayerTimesDto {
            record,
            coordinates,
        }),
        None,
        None,
    )))
}
