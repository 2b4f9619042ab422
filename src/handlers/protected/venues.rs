// handlers/protected/venues.rs - /api/venues read endpoints

use axum::extract::{Path, State};

use crate::database::models::{Facility, VenueSummary};
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/venues - active venues with their sports and gym flag
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<VenueSummary>> {
    Ok(ApiResponse::success(state.venues().list().await?))
}

/// GET /api/venues/:venue_id
pub async fn show(State(state): State<AppState>, Path(venue_id): Path<String>) -> ApiResult<VenueSummary> {
    let venue_id = parse_id("venue_id", &venue_id)?;
    Ok(ApiResponse::success(state.venues().get(venue_id).await?))
}

/// GET /api/venues/:venue_id/facilities
pub async fn facilities(State(state): State<AppState>, Path(venue_id): Path<String>) -> ApiResult<Vec<Facility>> {
    let venue_id = parse_id("venue_id", &venue_id)?;
    Ok(ApiResponse::success(state.venues().facilities(venue_id).await?))
}
