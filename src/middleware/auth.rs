use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::{decode_token, Claims, Role, SessionPayload};
use crate::error::ApiError;
use crate::state::AppState;

/// Cookie carrying the session token on forwarded server-to-server calls
pub const SESSION_COOKIE: &str = "access_token";

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Profile ids are UUIDs; anything else cannot own rows
    pub fn uuid(&self) -> Result<Uuid, ApiError> {
        Uuid::parse_str(&self.id).map_err(|_| ApiError::unauthorized("Token subject is not a valid user id"))
    }
}

impl From<Claims<SessionPayload>> for AuthUser {
    fn from(claims: Claims<SessionPayload>) -> Self {
        Self {
            id: claims.payload.sub,
            email: claims.payload.email,
            role: claims.payload.role,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers()).map_err(ApiError::unauthorized)?;

    let secret = state
        .config
        .security
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ApiError::unauthorized("JWT secret not configured"))?;

    let claims = decode_token::<SessionPayload>(&token, secret)?;
    let auth_user = AuthUser::from(claims);
    tracing::debug!("Authenticated {} ({:?})", auth_user.id, auth_user.role);

    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

/// Bearer header first, then the session cookie
pub(crate) fn extract_token(headers: &HeaderMap) -> Result<String, String> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| "Invalid Authorization header format".to_string())?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| "Authorization header must use Bearer token format".to_string())?;

        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        return Ok(token.trim().to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
        .ok_or_else(|| "Missing Authorization header".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn reads_bearer_token() {
        let map = headers(&[(header::AUTHORIZATION, "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&map).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let map = headers(&[(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        assert!(extract_token(&map).is_err());
        let map = headers(&[(header::AUTHORIZATION, "Bearer   ")]);
        assert!(extract_token(&map).is_err());
    }

    #[test]
    fn falls_back_to_forwarded_cookie() {
        let map = headers(&[(header::COOKIE, "theme=dark; access_token=tok123; other=1")]);
        assert_eq!(extract_token(&map).unwrap(), "tok123");
    }

    #[test]
    fn missing_credentials() {
        assert_eq!(
            extract_token(&HeaderMap::new()).unwrap_err(),
            "Missing Authorization header"
        );
        let map = headers(&[(header::COOKIE, "access_token=")]);
        assert!(extract_token(&map).is_err());
    }
}
