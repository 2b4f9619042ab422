// handlers/protected/auth.rs - GET /api/auth/whoami

use axum::extract::State;

use crate::database::models::Profile;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

pub async fn whoami(State(state): State<AppState>, user: AuthUser) -> ApiResult<Profile> {
    let profile = state.profiles().whoami(&user).await?;
    Ok(ApiResponse::success(profile))
}
