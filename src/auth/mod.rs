use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Every issued token lives for one hour
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Caller payload plus the registered time claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims<P> {
    #[serde(flatten)]
    pub payload: P,
    pub iat: i64,
    pub exp: i64,
}

impl<P> Claims<P> {
    pub fn new(payload: P) -> Self {
        let now = Utc::now();
        Self {
            payload,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        }
    }
}

/// Standard payload carried by session tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT_SECRET is not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    Encode(jsonwebtoken::errors::Error),

    #[error("{0}")]
    Decode(jsonwebtoken::errors::Error),
}

/// Sign `payload` with the `JWT_SECRET` of the running process
pub fn issue_token<P: Serialize>(payload: P) -> Result<String, JwtError> {
    let secret = std::env::var("JWT_SECRET").ok();
    issue_token_with_secret(payload, secret.as_deref())
}

pub fn issue_token_with_secret<P: Serialize>(payload: P, secret: Option<&str>) -> Result<String, JwtError> {
    let secret = secret
        .filter(|s| !s.is_empty())
        .ok_or(JwtError::MissingSecret)?;

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &Claims::new(payload), &encoding_key).map_err(JwtError::Encode)
}

/// Verify signature and expiry
pub fn decode_token<P: DeserializeOwned>(token: &str, secret: &str) -> Result<Claims<P>, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims<P>>(token, &decoding_key, &Validation::default())
        .map_err(JwtError::Decode)?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn refuses_to_sign_without_secret() {
        let result = issue_token_with_secret(json!({ "sub": "U1" }), None);
        assert!(matches!(result, Err(JwtError::MissingSecret)));

        let result = issue_token_with_secret(json!({ "sub": "U1" }), Some(""));
        assert!(matches!(result, Err(JwtError::MissingSecret)));
    }

    #[test]
    fn token_round_trips_payload_with_one_hour_expiry() {
        let payload = json!({ "sub": "U1", "venue": "north-court", "count": 3 });
        let token = issue_token_with_secret(payload.clone(), Some(SECRET)).unwrap();

        let claims: Claims<Value> = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.payload["sub"], "U1");
        assert_eq!(claims.payload["venue"], "north-court");
        assert_eq!(claims.payload["count"], 3);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);

        let now = Utc::now().timestamp();
        assert!((claims.exp - (now + TOKEN_TTL_SECS)).abs() <= 5);
    }

    #[test]
    fn session_payload_decodes_into_typed_claims() {
        let payload = SessionPayload {
            sub: "U1".to_string(),
            email: Some("u1@example.com".to_string()),
            role: Role::Admin,
        };
        let token = issue_token_with_secret(&payload, Some(SECRET)).unwrap();
        let claims: Claims<SessionPayload> = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.payload, payload);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token_with_secret(json!({ "sub": "U1" }), Some(SECRET)).unwrap();
        let result = decode_token::<Value>(&token, "other-secret");
        assert!(matches!(result, Err(JwtError::Decode(_))));
    }

    #[test]
    fn role_defaults_to_user() {
        let payload: SessionPayload = serde_json::from_value(json!({ "sub": "U9" })).unwrap();
        assert_eq!(payload.role, Role::User);
        assert!(payload.email.is_none());
    }
}
