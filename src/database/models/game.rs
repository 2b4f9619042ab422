use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::types::{JoinStatus, MatchVisibility, Team};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Match {
    pub id: Uuid,
    pub facility_id: Uuid,
    pub host_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub visibility: MatchVisibility,
    pub max_players: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchPlayer {
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub team: Option<Team>,
    pub status: JoinStatus,
    pub created_at: DateTime<Utc>,
}
