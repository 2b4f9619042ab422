// handlers/protected/mod.rs - endpoints behind jwt_auth_middleware
//
// Every handler here can take `AuthUser` as an extractor; the middleware has
// already rejected requests without a valid token.

pub mod auth;
pub mod bookings;
pub mod matches;
pub mod payments;
pub mod users;
pub mod venues;
