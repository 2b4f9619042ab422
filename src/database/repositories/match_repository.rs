use chrono::{DateTime, Utc};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::database::models::{Match, MatchPlayer};
use crate::database::{BaseRepository, DatabaseError};
use crate::domain::matches::Roster;
use crate::types::{JoinStatus, MatchVisibility, Team};

const MATCH_COLUMNS: &str = "id, facility_id, host_id, starts_at, visibility, max_players, created_at";
const PLAYER_COLUMNS: &str = "match_id, user_id, team, status, created_at";

pub struct NewMatch {
    pub facility_id: Uuid,
    pub host_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub visibility: MatchVisibility,
    pub max_players: i32,
}

pub struct MatchRepository {
    base: BaseRepository,
}

impl MatchRepository {
    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    /// Upcoming public matches
    pub async fn list_public(&self) -> Result<Vec<Match>, DatabaseError> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches
             WHERE visibility = 'public' AND starts_at >= now()
             ORDER BY starts_at"
        ))
        .fetch_all(self.base.pool())
        .await?;

        Ok(matches)
    }

    /// Upcoming private matches the user hosts or plays in
    pub async fn list_private_for(&self, user_id: Uuid) -> Result<Vec<Match>, DatabaseError> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches m
             WHERE m.visibility = 'private' AND m.starts_at >= now()
               AND (m.host_id = $1 OR EXISTS (
                   SELECT 1 FROM match_players mp
                   WHERE mp.match_id = m.id AND mp.user_id = $1 AND mp.status = 'approved'
               ))
             ORDER BY m.starts_at"
        ))
        .bind(user_id)
        .fetch_all(self.base.pool())
        .await?;

        Ok(matches)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Match>, DatabaseError> {
        let found = sqlx::query_as::<_, Match>(&format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;

        Ok(found)
    }

    pub async fn players(&self, match_id: Uuid) -> Result<Vec<MatchPlayer>, DatabaseError> {
        let players = sqlx::query_as::<_, MatchPlayer>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM match_players WHERE match_id = $1 ORDER BY created_at"
        ))
        .bind(match_id)
        .fetch_all(self.base.pool())
        .await?;

        Ok(players)
    }
}

pub async fn insert(conn: &mut PgConnection, new: &NewMatch) -> Result<Match, DatabaseError> {
    let created = sqlx::query_as::<_, Match>(&format!(
        "INSERT INTO matches (facility_id, host_id, starts_at, visibility, max_players)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {MATCH_COLUMNS}"
    ))
    .bind(new.facility_id)
    .bind(new.host_id)
    .bind(new.starts_at)
    .bind(new.visibility)
    .bind(new.max_players)
    .fetch_one(conn)
    .await?;

    Ok(created)
}

/// Lock the match row so roster changes on it serialize
pub async fn lock(conn: &mut PgConnection, id: Uuid) -> Result<Option<Match>, DatabaseError> {
    let found = sqlx::query_as::<_, Match>(&format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1 FOR UPDATE"))
        .bind(id)
        .fetch_optional(conn)
        .await?;

    Ok(found)
}

pub async fn find_player(
    conn: &mut PgConnection,
    match_id: Uuid,
    user_id: Uuid,
) -> Result<Option<MatchPlayer>, DatabaseError> {
    let player = sqlx::query_as::<_, MatchPlayer>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM match_players WHERE match_id = $1 AND user_id = $2"
    ))
    .bind(match_id)
    .bind(user_id)
    .fetch_optional(conn)
    .await?;

    Ok(player)
}

pub async fn roster(conn: &mut PgConnection, match_id: Uuid) -> Result<Roster, DatabaseError> {
    let (a, b): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*) FILTER (WHERE team = 'A'), COUNT(*) FILTER (WHERE team = 'B')
         FROM match_players WHERE match_id = $1 AND status = 'approved'",
    )
    .bind(match_id)
    .fetch_one(conn)
    .await?;

    Ok(Roster { a, b })
}

/// Insert or overwrite a player's membership row
pub async fn upsert_player(
    conn: &mut PgConnection,
    match_id: Uuid,
    user_id: Uuid,
    team: Option<Team>,
    status: JoinStatus,
) -> Result<MatchPlayer, DatabaseError> {
    let player = sqlx::query_as::<_, MatchPlayer>(&format!(
        "INSERT INTO match_players (match_id, user_id, team, status)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (match_id, user_id) DO UPDATE SET team = EXCLUDED.team, status = EXCLUDED.status
         RETURNING {PLAYER_COLUMNS}"
    ))
    .bind(match_id)
    .bind(user_id)
    .bind(team)
    .bind(status)
    .fetch_one(conn)
    .await?;

    Ok(player)
}
