// handlers/elevated/mod.rs - admin endpoints (/api/admin/*)
//
// Routed behind jwt_auth_middleware and require_admin; non-admins get a 403
// carrying the redirect target.

pub mod payments;
pub mod reports;
pub mod venues;
