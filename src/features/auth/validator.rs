use super::model::AuthenticatedUser;
use crate::core::error::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;

/// Validates HS256 tokens issued by the identity service that shares `JWT_SECRET`
pub struct JwtValidator {
    decoding_key: DecodingKey,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    #[serde(rename = "userId", default)]
    user_id: Option<String>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(rename = "exp")]
    _exp: u64,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;
        validation.required_spec_claims = ["exp".to_string()].into_iter().collect();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        // Older tokens carry `userId`; standard ones carry `sub`
        let claims = token_data.claims;
        let user_id = claims
            .user_id
            .or(claims.sub)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::Auth("Token has no subject".to_string()))?;

        Ok(AuthenticatedUser { user_id })
    }
}
