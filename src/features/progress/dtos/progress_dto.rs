use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::progress::models::{PrayerName, PrayerProgress, UserLocation, UserProgress};

/// Mark a prayer as done, or undo the latest mark
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecordPrayerDto {
    pub prayer: PrayerName,
    pub completed: bool,
    /// When the prayer was performed; defaults to now
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LocationDto {
    #[validate(
        custom(function = "crate::shared::validation::validate_finite"),
        range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90")
    )]
    pub latitude: f64,

    #[validate(
        custom(function = "crate::shared::validation::validate_finite"),
        range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180")
    )]
    pub longitude: f64,

    #[validate(length(max = 200, message = "Location name must be at most 200 characters"))]
    pub name: Option<String>,
}

impl From<LocationDto> for UserLocation {
    fn from(dto: LocationDto) -> Self {
        Self {
            latitude: dto.latitude,
            longitude: dto.longitude,
            name: dto.name,
        }
    }
}

/// Fields left out are kept as they are
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationDto {
    #[schema(example = "SGR01")]
    pub zone: Option<String>,

    #[validate(nested)]
    pub location: Option<LocationDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProgressResponseDto {
    pub user_id: String,
    pub prayer_progress: PrayerProgress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<UserLocation>,
}

impl UserProgressResponseDto {
    pub fn new(user_id: &str, progress: UserProgress) -> Self {
        Self {
            user_id: user_id.to_string(),
            prayer_progress: progress.prayer_progress,
            zone: progress.zone,
            location: progress.location,
        }
    }
}
