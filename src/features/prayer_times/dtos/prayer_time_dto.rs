use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::prayer_times::models::PrayerTimeRecord;
use crate::shared::types::Coordinate;

/// Prayer times for the zone containing the requested coordinates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatePrayerTimesDto {
    #[serde(flatten)]
    pub record: PrayerTimeRecord,
    pub coordinates: Coordinate,
}
