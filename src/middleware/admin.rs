use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::ApiError;

use super::auth::AuthUser;

/// Where non-admins are sent instead
pub const NON_ADMIN_REDIRECT: &str = "/dashboard";

/// Must run after `jwt_auth_middleware`
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("JWT authentication required before admin check"))?;

    if !user.is_admin() {
        tracing::warn!("Non-admin {} denied access to {}", user.id, request.uri().path());
        return Err(ApiError::forbidden_with_redirect(
            "Admin access required",
            NON_ADMIN_REDIRECT,
        ));
    }

    Ok(next.run(request).await)
}
