//! Reverse geocoding proxy in front of Nominatim.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{GeocodingService, NominatimClient};
