use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::venue::is_gym;
use crate::types::SportType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sport {
    pub id: Uuid,
    pub name: String,
    pub sport_type: SportType,
    pub time_bound: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Venue with its sports and the derived gym flag, as listed to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSummary {
    #[serde(flatten)]
    pub venue: Venue,
    pub sports: Vec<Sport>,
    pub is_gym: bool,
}

impl VenueSummary {
    pub fn new(venue: Venue, sports: Vec<Sport>) -> Self {
        let is_gym = is_gym(&sports);
        Self { venue, sports, is_gym }
    }
}
