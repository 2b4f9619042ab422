use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::positive_amount;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub booking_id: Uuid,
    #[validate(custom = "positive_amount")]
    pub amount: Decimal,
    #[validate(length(min = 1, max = 40))]
    pub method: String,
    /// Must point at the storage bucket; checked against the image allowlist
    #[serde(default)]
    pub proof_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDecision {
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewPaymentDto {
    pub decision: PaymentDecision,
}
