// handlers/protected/payments.rs - POST /api/payments

use axum::extract::State;

use crate::database::models::Payment;
use crate::dto::CreatePaymentDto;
use crate::extractors::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

pub async fn submit(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePaymentDto>,
) -> ApiResult<Payment> {
    let payment = state
        .payments()
        .submit(user.uuid()?, dto, &state.config.storage)
        .await?;
    Ok(ApiResponse::created(payment))
}
