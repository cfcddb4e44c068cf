//! Daily prayer times per JAKIM zone.
//!
//! Lookups go through a short-lived cache, then the JAKIM e-solat API with
//! retries, and finally a static fallback table, so a well-formed request
//! always gets times back.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/prayer-times/{zone_code}` | Today's times for a zone |
//! | GET | `/api/prayer-times/by-coordinates?lat=&lng=` | Today's times for coordinates |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
pub mod testing;

pub use models::UpstreamError;
pub use services::PrayerTimeService;
