//! Bearer token validation for user-scoped endpoints.
//!
//! Tokens are issued by an external identity service and signed with the
//! shared `JWT_SECRET` (HS256). This feature only verifies them.

mod validator;

pub mod model;

pub use validator::JwtValidator;
