//! JAKIM prayer-time zones.
//!
//! Holds the static zone table and resolves coordinates to a zone code.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/zones` | List all zones |
//! | GET | `/api/zones/{code}` | Get zone by code |
//! | GET | `/api/zones/from-coordinates?lat=&lng=` | Resolve coordinates to a zone |

pub mod data;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ZoneResolver;
