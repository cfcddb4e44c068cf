use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::shared::constants::{
    MALAYSIA_LAT_MAX, MALAYSIA_LAT_MIN, MALAYSIA_LNG_MAX, MALAYSIA_LNG_MIN, ZONE_CODE_MAX_LEN,
    ZONE_CODE_MIN_LEN,
};

lazy_static! {
    /// Regex for validating JAKIM zone codes (after upper-casing)
    /// Must be 3-10 ASCII letters or digits
    /// - Valid: "WLY01", "SGR03", "JHR02"
    /// - Invalid: "WL", "WLY-01", "WLY 01", "WLY01WLY01X"
    pub static ref ZONE_CODE_REGEX: Regex = Regex::new(r"^[A-Z0-9]{3,10}$").unwrap();

    /// Regex for 24-hour prayer times as published by JAKIM
    /// - Valid: "05:49", "05:49:00", "23:59:59"
    /// - Invalid: "5:49", "24:00", "05:60", "5:49 AM"
    pub static ref PRAYER_TIME_REGEX: Regex =
        Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9](:[0-5][0-9])?$").unwrap();
}

/// Normalize and validate a zone code from user input.
///
/// Returns the upper-cased code, or `None` when it is not 3-10 ASCII alphanumerics.
pub fn normalize_zone_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() < ZONE_CODE_MIN_LEN || code.len() > ZONE_CODE_MAX_LEN {
        return None;
    }
    ZONE_CODE_REGEX.is_match(&code).then_some(code)
}

/// Rejects NaN and infinities, which `range` validation lets through.
pub fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("Value must be a finite number".into()))
    }
}

fn within(value: f64, min: f64, max: f64, message: &'static str) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("range").with_message(message.into()))
    }
}

/// Latitude inside the Malaysia envelope (0.5 to 7.5, inclusive)
pub fn validate_malaysia_latitude(value: f64) -> Result<(), ValidationError> {
    validate_finite(value)?;
    within(
        value,
        MALAYSIA_LAT_MIN,
        MALAYSIA_LAT_MAX,
        "Latitude must be between 0.5 and 7.5",
    )
}

/// Longitude inside the Malaysia envelope (99.0 to 120.0, inclusive)
pub fn validate_malaysia_longitude(value: f64) -> Result<(), ValidationError> {
    validate_finite(value)?;
    within(
        value,
        MALAYSIA_LNG_MIN,
        MALAYSIA_LNG_MAX,
        "Longitude must be between 99.0 and 120.0",
    )
}
