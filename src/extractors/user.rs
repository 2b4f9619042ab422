use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Pass `target_id` through in canonical form unless it names the requester.
///
/// Ids are compared as parsed UUIDs so case or braces cannot disguise the caller.
pub fn ensure_not_self(requester: Option<&AuthUser>, target_id: &str) -> Result<String, ApiError> {
    let requester = requester.ok_or_else(|| ApiError::unauthorized("Authentication required"))?;
    let requester_id = requester.uuid()?;
    let target = Uuid::parse_str(target_id)
        .map_err(|_| ApiError::invalid_field("user_id", format!("Invalid UUID format: {}", target_id)))?;

    if requester_id == target {
        tracing::warn!("User {} attempted an action on themself", requester_id);
        return Err(ApiError::bad_request("You cannot perform this action on yourself"));
    }

    Ok(target.to_string())
}

/// `:user_id` path parameter that is guaranteed not to be the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotSelf(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for NotSelf
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let target = params
            .get("user_id")
            .ok_or_else(|| ApiError::bad_request("Missing user id in path"))?;

        ensure_not_self(parts.extensions.get::<AuthUser>(), target).map(NotSelf)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}
