// handlers/elevated/reports.rs - GET /api/admin/reports/bookings

use axum::extract::{rejection::QueryRejection, Query, State};

use crate::dto::{BookingStatsQuery, BookingStatsResponseDto};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn booking_stats(
    State(state): State<AppState>,
    query: Result<Query<BookingStatsQuery>, QueryRejection>,
) -> ApiResult<BookingStatsResponseDto> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    Ok(ApiResponse::success(state.bookings().stats(&query).await?))
}
