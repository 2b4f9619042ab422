use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::types::PaymentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub method: String,
    pub proof_url: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// Pending payment joined with what an admin needs to review it
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingPayment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub payment: Payment,
    pub payer_email: String,
    pub venue_name: String,
    pub facility_name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}
