use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::geocoding::dtos::ReverseGeocodeQuery;
use crate::features::geocoding::services::GeocodingService;

/// Reverse geocode coordinates through Nominatim
///
/// The Nominatim response body is returned unchanged, without the API envelope.
#[utoipa::path(
    get,
    path = "/api/nominatim-proxy",
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Nominatim reverse geocoding result", body = Object),
        (status = 400, description = "lat/lon missing or not numeric"),
        (status = 502, description = "Nominatim request failed"),
        (status = 504, description = "Nominatim timed out")
    ),
    tag = "geocoding"
)]
pub async fn nominatim_proxy(
    State(service): State<Arc<GeocodingService>>,
    AppQuery(query): AppQuery<ReverseGeocodeQuery>,
) -> Result<Json<Value>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let body = service.reverse(&query).await?;
    Ok(Json(body))
}
