// =============================================================================
// MALAYSIA ENVELOPE
// =============================================================================

/// Southernmost latitude accepted by the HTTP layer
pub const MALAYSIA_LAT_MIN: f64 = 0.5;

/// Northernmost latitude accepted by the HTTP layer
pub const MALAYSIA_LAT_MAX: f64 = 7.5;

/// Westernmost longitude accepted by the HTTP layer
pub const MALAYSIA_LNG_MIN: f64 = 99.0;

/// Easternmost longitude accepted by the HTTP layer
pub const MALAYSIA_LNG_MAX: f64 = 120.0;

// =============================================================================
// ZONES
// =============================================================================

/// Zone used when no zone-specific data is available (Kuala Lumpur, Putrajaya)
pub const DEFAULT_ZONE_CODE: &str = "WLY01";

/// Zone code length bounds (inclusive)
pub const ZONE_CODE_MIN_LEN: usize = 3;
pub const ZONE_CODE_MAX_LEN: usize = 10;

// =============================================================================
// TIME
// =============================================================================

/// Malaysia Time (UTC+8), used to decide which day "today" is
pub const MALAYSIA_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Mean Earth radius used for haversine distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Service version reported by health endpoints
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
