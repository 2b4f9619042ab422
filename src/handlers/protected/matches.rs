// handlers/protected/matches.rs - /api/matches

use axum::extract::{Path, State};

use crate::database::models::{Match, MatchPlayer};
use crate::dto::{CreateMatchDto, ReviewJoinRequestDto, SwitchTeamDto};
use crate::extractors::{MatchScope, NotSelf, Scope, ValidatedJson};
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::match_service::MatchDetail;
use crate::state::AppState;

/// GET /api/matches?scope=public|private
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Scope(scope): Scope<MatchScope>,
) -> ApiResult<Vec<Match>> {
    Ok(ApiResponse::success(state.matches().list(scope, user.uuid()?).await?))
}

/// GET /api/matches/:match_id
pub async fn show(State(state): State<AppState>, Path(match_id): Path<String>) -> ApiResult<MatchDetail> {
    let match_id = parse_id("match_id", &match_id)?;
    Ok(ApiResponse::success(state.matches().get(match_id).await?))
}

/// POST /api/matches
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateMatchDto>,
) -> ApiResult<MatchDetail> {
    let detail = state.matches().create(user.uuid()?, dto).await?;
    Ok(ApiResponse::created(detail))
}

/// POST /api/matches/:match_id/join
pub async fn join(
    State(state): State<AppState>,
    user: AuthUser,
    Path(match_id): Path<String>,
) -> ApiResult<MatchPlayer> {
    let match_id = parse_id("match_id", &match_id)?;
    let player = state.matches().request_join(match_id, user.uuid()?).await?;
    Ok(ApiResponse::created(player))
}

/// POST /api/matches/:match_id/requests/:user_id/review
pub async fn review_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path((match_id, _)): Path<(String, String)>,
    NotSelf(player_id): NotSelf,
    ValidatedJson(dto): ValidatedJson<ReviewJoinRequestDto>,
) -> ApiResult<MatchPlayer> {
    let match_id = parse_id("match_id", &match_id)?;
    let player_id = parse_id("user_id", &player_id)?;

    let player = state
        .matches()
        .review_request(user.uuid()?, match_id, player_id, dto)
        .await?;
    Ok(ApiResponse::success(player))
}

/// POST /api/matches/:match_id/team
pub async fn switch_team(
    State(state): State<AppState>,
    user: AuthUser,
    Path(match_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<SwitchTeamDto>,
) -> ApiResult<MatchPlayer> {
    let match_id = parse_id("match_id", &match_id)?;
    let player = state.matches().switch_team(user.uuid()?, match_id, dto).await?;
    Ok(ApiResponse::success(player))
}
