use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity extracted from a validated bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub user_id: String,
}
