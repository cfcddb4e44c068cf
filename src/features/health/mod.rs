//! Liveness and status endpoints.

pub mod dto;
pub mod handler;
pub mod routes;

pub use handler::HealthState;
