use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Facility {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub sport_id: Uuid,
    pub name: String,
    pub price_per_hour: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
