// handlers/mod.rs - 3-tier handler layout
//
// public    → no authentication (/, /health, /api/config/images)
// protected → JWT required (/api/*)
// elevated  → JWT with the admin role (/api/admin/*)

pub mod elevated;
pub mod protected;
pub mod public;

use uuid::Uuid;

use crate::error::ApiError;

/// Path ids arrive as strings so a malformed one gets the JSON error envelope
pub(crate) fn parse_id(field: &str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_field(field, format!("Invalid UUID format: {}", raw)))
}
