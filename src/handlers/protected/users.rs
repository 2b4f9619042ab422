// handlers/protected/users.rs - /api/users/:user_id/follow

use axum::extract::State;

use crate::extractors::NotSelf;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::follow_service::FollowOutcome;
use crate::state::AppState;

/// POST /api/users/:user_id/follow
pub async fn follow(State(state): State<AppState>, user: AuthUser, NotSelf(target): NotSelf) -> ApiResult<FollowOutcome> {
    let outcome = state.follows().follow(user.uuid()?, &target).await?;
    Ok(ApiResponse::success(outcome))
}

/// DELETE /api/users/:user_id/follow
pub async fn unfollow(
    State(state): State<AppState>,
    user: AuthUser,
    NotSelf(target): NotSelf,
) -> ApiResult<FollowOutcome> {
    let outcome = state.follows().unfollow(user.uuid()?, &target).await?;
    Ok(ApiResponse::success(outcome))
}
