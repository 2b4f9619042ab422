// handlers/public/root.rs - GET /

use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};

pub async fn root() -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "name": "Playfield API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Sports facility booking backend",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "images": "/api/config/images (public)",
            "auth": "/api/auth/whoami (protected)",
            "venues": "/api/venues[/:venue_id[/facilities]] (protected)",
            "bookings": "/api/bookings, /api/bookings/mine, /api/bookings/:booking_id/cancel (protected)",
            "payments": "/api/payments (protected)",
            "matches": "/api/matches[?scope=public|private], /api/matches/:match_id/* (protected)",
            "users": "/api/users/:user_id/follow (protected)",
            "admin": "/api/admin/* (admin role)",
        }
    })))
}
