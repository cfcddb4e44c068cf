//! Per-user prayer completion log, preferred zone and location.
//!
//! ## Endpoints (bearer token required)
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/user/progress` | Current progress |
//! | POST | `/api/user/prayer` | Mark or unmark a prayer |
//! | PUT | `/api/user/location` | Set zone and/or location |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProgressService;
