use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::geocoding::handlers as geocoding_handlers;
use crate::features::health::{dto as health_dto, handler as health_handler};
use crate::features::prayer_times::{
    dtos as prayer_times_dtos, handlers as prayer_times_handlers, models as prayer_times_models,
};
use crate::features::progress::{
    dtos as progress_dtos, handlers as progress_handlers, models as progress_models,
};
use crate::features::zones::{dtos as zones_dtos, handlers as zones_handlers};
use crate::shared::types::{ApiResponse, Coordinate, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health_handler::health,
        health_handler::ping,
        // Zones
        zones_handlers::list_zones,
        zones_handlers::get_zone,
        zones_handlers::zone_from_coordinates,
        // Prayer times
        prayer_times_handlers::get_prayer_times,
        prayer_times_handlers::get_prayer_times_by_coordinates,
        // Geocoding
        geocoding_handlers::nominatim_proxy,
        // Progress (protected)
        progress_handlers::get_progress,
        progress_handlers::record_prayer,
        progress_handlers::update_location,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Coordinate,
            // Health
            health_dto::HealthResponseDto,
            health_dto::PingResponseDto,
            ApiResponse<health_dto::HealthResponseDto>,
            ApiResponse<health_dto::PingResponseDto>,
            // Zones
            zones_dtos::BoundsDto,
            zones_dtos::ZoneResponseDto,
            zones_dtos::ResolutionDto,
            zones_dtos::ZoneLookupResponseDto,
            ApiResponse<Vec<zones_dtos::ZoneResponseDto>>,
            ApiResponse<zones_dtos::ZoneResponseDto>,
            ApiResponse<zones_dtos::ZoneLookupResponseDto>,
            // Prayer times
            prayer_times_models::PrayerTimeSource,
            prayer_times_models::PrayerTimes,
            prayer_times_models::PrayerTimeRecord,
            prayer_times_dtos::CoordinatePrayerTimesDto,
            ApiResponse<prayer_times_models::PrayerTimeRecord>,
            ApiResponse<prayer_times_dtos::CoordinatePrayerTimesDto>,
            // Progress
            progress_models::PrayerName,
            progress_models::PrayerProgress,
            progress_models::UserLocation,
            progress_dtos::RecordPrayerDto,
            progress_dtos::LocationDto,
            progress_dtos::UpdateLocationDto,
            progress_dtos::UserProgressResponseDto,
            ApiResponse<progress_dtos::UserProgressResponseDto>,
        )
    ),
    tags(
        (name = "health", description = "Service status"),
        (name = "zones", description = "JAKIM prayer-time zones and coordinate lookup"),
        (name = "prayer-times", description = "Daily prayer times per zone"),
        (name = "geocoding", description = "Reverse geocoding proxy (Nominatim)"),
        (name = "progress", description = "User prayer progress (bearer token required)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Waktu Solat API",
        version = "0.1.0",
        description = "Malaysian prayer times backed by JAKIM e-solat",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
