// handlers/elevated/payments.rs - payment verification queue

use axum::extract::{Path, State};

use crate::database::models::PendingPayment;
use crate::dto::ReviewPaymentDto;
use crate::extractors::ValidatedJson;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::payment_service::PaymentReview;
use crate::state::AppState;

/// GET /api/admin/payments/pending
pub async fn pending(State(state): State<AppState>) -> ApiResult<Vec<PendingPayment>> {
    Ok(ApiResponse::success(state.payments().pending().await?))
}

/// POST /api/admin/payments/:payment_id/review
pub async fn review(
    State(state): State<AppState>,
    admin: AuthUser,
    Path(payment_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<ReviewPaymentDto>,
) -> ApiResult<PaymentReview> {
    let payment_id = parse_id("payment_id", &payment_id)?;
    tracing::debug!("Admin {} reviewing payment {}", admin.id, payment_id);

    Ok(ApiResponse::success(state.payments().review(payment_id, dto).await?))
}
