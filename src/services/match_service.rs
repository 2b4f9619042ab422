use serde::Serialize;
use uuid::Uuid;

use crate::database::models::{Match, MatchPlayer};
use crate::database::repositories::match_repository::{self, NewMatch};
use crate::database::repositories::{booking_repository, MatchRepository};
use crate::database::BaseRepository;
use crate::dto::{CreateMatchDto, JoinDecision, ReviewJoinRequestDto, SwitchTeamDto};
use crate::error::ApiError;
use crate::extractors::MatchScope;
use crate::types::{JoinStatus, Team};

#[derive(Debug, Serialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub game: Match,
    pub players: Vec<MatchPlayer>,
}

pub struct MatchService {
    repo: MatchRepository,
}

impl MatchService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            repo: MatchRepository::new(base),
        }
    }

    pub async fn list(&self, scope: MatchScope, user_id: Uuid) -> Result<Vec<Match>, ApiError> {
        let matches = match scope {
            MatchScope::Public => self.repo.list_public().await?,
            MatchScope::Private => self.repo.list_private_for(user_id).await?,
        };
        Ok(matches)
    }

    pub async fn get(&self, match_id: Uuid) -> Result<MatchDetail, ApiError> {
        let game = self
            .repo
            .find(match_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Match not found"))?;
        let players = self.repo.players(match_id).await?;
        Ok(MatchDetail { game, players })
    }

    /// The host joins their own match as an approved player
    pub async fn create(&self, host_id: Uuid, dto: CreateMatchDto) -> Result<MatchDetail, ApiError> {
        let new_match = NewMatch {
            facility_id: dto.facility_id,
            host_id,
            starts_at: dto.starts_at,
            visibility: dto.visibility,
            max_players: dto.max_players,
        };
        let host_team = dto.team.unwrap_or(Team::A);

        let detail = self
            .repo
            .base()
            .transaction(move |tx| {
                Box::pin(async move {
                    booking_repository::lock_facility(&mut **tx, new_match.facility_id)
                        .await?
                        .filter(|f| f.is_active)
                        .ok_or_else(|| ApiError::not_found("Facility not found"))?;

                    let game = match_repository::insert(&mut **tx, &new_match).await?;
                    let host = match_repository::upsert_player(
                        &mut **tx,
                        game.id,
                        host_id,
                        Some(host_team),
                        JoinStatus::Approved,
                    )
                    .await?;

                    Ok::<_, ApiError>(MatchDetail {
                        game,
                        players: vec![host],
                    })
                })
            })
            .await?;

        tracing::info!("Match {} created by {}", detail.game.id, host_id);
        Ok(detail)
    }

    pub async fn request_join(&self, match_id: Uuid, user_id: Uuid) -> Result<MatchPlayer, ApiError> {
        self.repo
            .base()
            .transaction(move |tx| {
                Box::pin(async move {
                    let game = match_repository::lock(&mut **tx, match_id)
                        .await?
                        .ok_or_else(|| ApiError::not_found("Match not found"))?;

                    if game.host_id == user_id {
                        return Err(ApiError::bad_request("You are hosting this match"));
                    }

                    match match_repository::find_player(&mut **tx, match_id, user_id).await? {
                        Some(existing) if existing.status != JoinStatus::Rejected => {
                            return Err(ApiError::conflict("You have already requested to join this match"));
                        }
                        _ => {}
                    }

                    let player =
                        match_repository::upsert_player(&mut **tx, match_id, user_id, None, JoinStatus::Pending)
                            .await?;
                    Ok::<_, ApiError>(player)
                })
            })
            .await
    }

    /// Host approves or rejects a pending request
    pub async fn review_request(
        &self,
        host_id: Uuid,
        match_id: Uuid,
        player_id: Uuid,
        dto: ReviewJoinRequestDto,
    ) -> Result<MatchPlayer, ApiError> {
        let player = self
            .repo
            .base()
            .transaction(move |tx| {
                Box::pin(async move {
                    let game = match_repository::lock(&mut **tx, match_id)
                        .await?
                        .ok_or_else(|| ApiError::not_found("Match not found"))?;

                    if game.host_id != host_id {
                        return Err(ApiError::forbidden("Only the host can review join requests"));
                    }

                    let request = match_repository::find_player(&mut **tx, match_id, player_id)
                        .await?
                        .ok_or_else(|| ApiError::not_found("Join request not found"))?;

                    if request.status != JoinStatus::Pending {
                        return Err(ApiError::conflict("Join request has already been reviewed"));
                    }

                    let (team, status) = match dto.decision {
                        JoinDecision::Approved => {
                            let roster = match_repository::roster(&mut **tx, match_id).await?;
                            let team = roster.assign(dto.assigned_team, game.max_players)?;
                            (Some(team), JoinStatus::Approved)
                        }
                        JoinDecision::Rejected => (None, JoinStatus::Rejected),
                    };

                    let player = match_repository::upsert_player(&mut **tx, match_id, player_id, team, status).await?;
                    Ok::<_, ApiError>(player)
                })
            })
            .await?;

        tracing::info!(
            "Join request of {} for match {} {:?} (team {:?})",
            player_id,
            match_id,
            player.status,
            player.team
        );
        Ok(player)
    }

    pub async fn switch_team(&self, user_id: Uuid, match_id: Uuid, dto: SwitchTeamDto) -> Result<MatchPlayer, ApiError> {
        let target = dto.team;

        self.repo
            .base()
            .transaction(move |tx| {
                Box::pin(async move {
                    let game = match_repository::lock(&mut **tx, match_id)
                        .await?
                        .ok_or_else(|| ApiError::not_found("Match not found"))?;

                    let player = match_repository::find_player(&mut **tx, match_id, user_id)
                        .await?
                        .filter(|p| p.status == JoinStatus::Approved)
                        .ok_or_else(|| ApiError::forbidden("Only approved players can switch teams"))?;

                    let roster = match_repository::roster(&mut **tx, match_id).await?;
                    roster.switch(player.team, target, game.max_players)?;

                    if player.team == Some(target) {
                        return Ok(player);
                    }

                    let player = match_repository::upsert_player(
                        &mut **tx,
                        match_id,
                        user_id,
                        Some(target),
                        JoinStatus::Approved,
                    )
                    .await?;
                    Ok::<_, ApiError>(player)
                })
            })
            .await
    }
}
