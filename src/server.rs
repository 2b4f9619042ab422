use anyhow::Context;
use axum::{
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers::{elevated, protected, public};
use crate::middleware::{jwt_auth_middleware, require_admin};
use crate::state::AppState;

/// Full router: public routes, `/api` behind JWT, `/api/admin` behind the admin check
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/config/images", get(public::image_config))
        // Protected API
        .nest("/api", protected_routes(state.clone()))
        .layer(cors_layer(&state.config.security));

    let router = if state.config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::{auth, bookings, matches, payments, users, venues};

    Router::new()
        .route("/auth/whoami", get(auth::whoami))
        // Venues
        .route("/venues", get(venues::list))
        .route("/venues/:venue_id", get(venues::show))
        .route("/venues/:venue_id/facilities", get(venues::facilities))
        // Bookings and payments
        .route("/bookings", post(bookings::create))
        .route("/bookings/mine", get(bookings::mine))
        .route("/bookings/:booking_id/cancel", post(bookings::cancel))
        .route("/payments", post(payments::submit))
        // Matches
        .route("/matches", get(matches::list).post(matches::create))
        .route("/matches/:match_id", get(matches::show))
        .route("/matches/:match_id/join", post(matches::join))
        .route("/matches/:match_id/requests/:user_id/review", post(matches::review_request))
        .route("/matches/:match_id/team", post(matches::switch_team))
        // Social
        .route("/users/:user_id/follow", post(users::follow).delete(users::unfollow))
        .nest("/admin", admin_routes())
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn admin_routes() -> Router<AppState> {
    use elevated::{payments, reports, venues};

    Router::new()
        .route("/venues", post(venues::create_venue))
        .route("/venues/:venue_id/facilities", post(venues::create_facility))
        .route("/facilities/:facility_id", put(venues::update_facility))
        .route("/payments/pending", get(payments::pending))
        .route("/payments/:payment_id/review", post(payments::review))
        .route("/reports/bookings", get(reports::booking_stats))
        .route_layer(from_fn(require_admin))
}

/// No configured origins means any origin
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let port = config.api.port;
    tracing::info!("Starting Playfield API in {:?} mode", config.environment);

    let state = AppState::from_config(config).context("failed to configure database pool")?;

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Playfield API listening on http://{}", bind_addr);
    axum::serve(listener, app(state)).await.context("server error")?;
    Ok(())
}
