use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

const DEFAULT_ZOOM: u8 = 10;
const DEFAULT_ADDRESS_DETAILS: u8 = 1;

/// Query for `/api/nominatim-proxy`
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct ReverseGeocodeQuery {
    /// Latitude in decimal degrees
    #[param(example = 3.139)]
    #[validate(
        custom(function = "crate::shared::validation::validate_finite"),
        range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90")
    )]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[param(example = 101.6869)]
    #[validate(
        custom(function = "crate::shared::validation::validate_finite"),
        range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180")
    )]
    pub lon: f64,

    /// Nominatim detail level, 0 (country) to 18 (building). Defaults to 10.
    #[validate(range(max = 18, message = "Zoom must be between 0 and 18"))]
    pub zoom: Option<u8>,

    /// Include the address breakdown (1) or not (0). Defaults to 1.
    #[validate(range(max = 1, message = "addressdetails must be 0 or 1"))]
    pub addressdetails: Option<u8>,
}

impl ReverseGeocodeQuery {
    pub fn zoom(&self) -> u8 {
        self.zoom.unwrap_or(DEFAULT_ZOOM)
    }

    pub fn address_details(&self) -> u8 {
        self.addressdetails.unwrap_or(DEFAULT_ADDRESS_DETAILS)
    }
}
