// handlers/protected/bookings.rs - /api/bookings

use axum::extract::{Path, State};

use crate::database::models::Booking;
use crate::dto::CreateBookingDto;
use crate::extractors::ValidatedJson;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateBookingDto>,
) -> ApiResult<Booking> {
    let booking = state.bookings().create(user.uuid()?, dto).await?;
    Ok(ApiResponse::created(booking))
}

/// GET /api/bookings/mine
pub async fn mine(State(state): State<AppState>, user: AuthUser) -> ApiResult<Vec<Booking>> {
    Ok(ApiResponse::success(state.bookings().mine(user.uuid()?).await?))
}

/// POST /api/bookings/:booking_id/cancel
pub async fn cancel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(booking_id): Path<String>,
) -> ApiResult<Booking> {
    let booking_id = parse_id("booking_id", &booking_id)?;
    Ok(ApiResponse::success(state.bookings().cancel(user.uuid()?, booking_id).await?))
}
