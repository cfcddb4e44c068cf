use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::zones::dtos::{CoordinateQuery, ZoneLookupResponseDto, ZoneResponseDto};
use crate::features::zones::services::ZoneResolver;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::normalize_zone_code;

/// List all JAKIM zones
#[utoipa::path(
    get,
    path = "/api/zones",
    responses(
        (status = 200, description = "All zones in resolution order", body = ApiResponse<Vec<ZoneResponseDto>>)
    ),
    tag = "zones"
)]
pub async fn list_zones(
    State(resolver): State<Arc<ZoneResolver>>,
) -> Result<Json<ApiResponse<Vec<ZoneResponseDto>>>> {
    let zones: Vec<ZoneResponseDto> = resolver.zones().iter().map(Into::into).collect();
    let total = zones.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(zones),
        None,
        Some(Meta { total }),
    )))
}

/// Get a zone by code
#[utoipa::path(
    get,
    path = "/api/zones/{code}",
    params(
        ("code" = String, Path, description = "JAKIM zone code, e.g. WLY01")
    ),
    responses(
        (status = 200, description = "Zone details", body = ApiResponse<ZoneResponseDto>),
        (status = 400, description = "Malformed zone code"),
        (status = 404, description = "Zone not found")
    ),
    tag = "zones"
)]
pub async fn get_zone(
    State(resolver): State<Arc<ZoneResolver>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ZoneResponseDto>>> {
    let code = normalize_zone_code(&code)
        .ok_or_else(|| AppError::BadRequest("Invalid zone code format".to_string()))?;

    let zone = resolver
        .find(&code)
        .ok_or_else(|| AppError::NotFound(format!("Zone {} not found", code)))?;

    Ok(Json(ApiResponse::success(Some(zone.into()), None, None)))
}

/// Resolve coordinates to a JAKIM zone
///
/// Coordinates outside every zone rectangle resolve to the nearest zone.
#[utoipa::path(
    get,
    path = "/api/zones/from-coordinates",
    params(CoordinateQuery),
    responses(
        (status = 200, description = "Resolved zone", body = ApiResponse<ZoneLookupResponseDto>),
        (status = 400, description = "Coordinates missing, not numeric, or outside Malaysia")
    ),
    tag = "zones"
)]
pub async fn zone_from_coordinates(
    State(resolver): State<Arc<ZoneResolver>>,
    AppQuery(query): AppQuery<CoordinateQuery>,
) -> Result<Json<ApiResponse<ZoneLookupResponseDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let coordinate = query.coordinate();
    let found = resolver.resolve(coordinate);

    Ok(Json(ApiResponse::success(
        Some(ZoneLookupResponseDto::new(coordinate, found)),
        None,
        None,
    )))
}
