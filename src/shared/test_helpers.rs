use jsonwebtoken::{encode, EncodingKey, Header};

pub const TEST_JWT_SECRET: &str = "test-secret-do-not-use";

pub fn issue_token_with_claims(claims: &serde_json::Value, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to sign test token")
}

/// Token for `user_id`, valid for ten minutes, signed with [`TEST_JWT_SECRET`]
pub fn issue_token(user_id: &str) -> String {
    let exp = chrono::Utc::now().timestamp() + 600;
    issue_token_with_claims(
        &serde_json::json!({ "userId": user_id, "exp": exp }),
        TEST_JWT_SECRET,
    )
}
