// handlers/elevated/venues.rs - venue and facility management

use axum::extract::{Path, State};

use crate::database::models::{Facility, VenueSummary};
use crate::dto::{CreateFacilityDto, CreateVenueDto, UpdateFacilityDto};
use crate::extractors::ValidatedJson;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// POST /api/admin/venues
pub async fn create_venue(
    State(state): State<AppState>,
    admin: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateVenueDto>,
) -> ApiResult<VenueSummary> {
    let venue = state
        .venues()
        .create_venue(admin.uuid()?, dto, &state.config.storage)
        .await?;
    Ok(ApiResponse::created(venue))
}

/// POST /api/admin/venues/:venue_id/facilities
pub async fn create_facility(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreateFacilityDto>,
) -> ApiResult<Facility> {
    let venue_id = parse_id("venue_id", &venue_id)?;
    Ok(ApiResponse::created(state.venues().create_facility(venue_id, dto).await?))
}

/// PUT /api/admin/facilities/:facility_id
pub async fn update_facility(
    State(state): State<AppState>,
    Path(facility_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateFacilityDto>,
) -> ApiResult<Facility> {
    let facility_id = parse_id("facility_id", &facility_id)?;
    Ok(ApiResponse::success(state.venues().update_facility(facility_id, dto).await?))
}
