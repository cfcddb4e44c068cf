use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::zones::models::{Bounds, ResolutionMethod, Zone, ZoneMatch};
use crate::shared::types::Coordinate;

/// Coordinates supplied as `?lat=&lng=`, restricted to the Malaysia envelope
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct CoordinateQuery {
    /// Latitude in decimal degrees (0.5 to 7.5)
    #[param(example = 3.139)]
    #[validate(custom(function = "crate::shared::validation::validate_malaysia_latitude"))]
    pub lat: f64,

    /// Longitude in decimal degrees (99.0 to 120.0)
    #[param(example = 101.6869)]
    #[validate(custom(function = "crate::shared::validation::validate_malaysia_longitude"))]
    pub lng: f64,
}

impl CoordinateQuery {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoundsDto {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl From<Bounds> for BoundsDto {
    fn from(b: Bounds) -> Self {
        Self {
            lat_min: b.lat_min,
            lat_max: b.lat_max,
            lng_min: b.lng_min,
            lng_max: b.lng_max,
        }
    }
}

/// Response DTO for a JAKIM zone
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResponseDto {
    pub code: String,
    pub state: String,
    pub label: String,
    pub bounds: BoundsDto,
}

impl From<&Zone> for ZoneResponseDto {
    fn from(zone: &Zone) -> Self {
        Self {
            code: zone.code.to_string(),
            state: zone.state.to_string(),
            label: zone.label.to_string(),
            bounds: zone.bounds.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionDto {
    /// Coordinates fall inside the zone's rectangle
    Contained,
    /// Nearest zone by distance to its rectangle centre
    Nearest,
}

/// Response DTO for coordinate-to-zone lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneLookupResponseDto {
    pub zone: String,
    pub location_name: String,
    pub state: String,
    pub coordinates: Coordinate,
    pub resolution: ResolutionDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl ZoneLookupResponseDto {
    pub fn new(coordinates: Coordinate, found: ZoneMatch) -> Self {
        let (resolution, distance_km) = match found.method {
            ResolutionMethod::Contained => (ResolutionDto::Contained, None),
            ResolutionMethod::Nearest { distance_km } => {
                (ResolutionDto::Nearest, Some(distance_km))
            }
        };

        Self {
            zone: found.zone.code.to_string(),
            location_name: found.zone.label.to_string(),
            state: found.zone.state.to_string(),
            coordinates,
            resolution,
            distance_km,
        }
    }
}
