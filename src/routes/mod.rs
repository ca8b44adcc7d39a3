//! HTTP routing

pub mod health;
pub mod wizard;

use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::pricing;
use crate::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(match state.config.cors_allow_origin.clone() {
            Some(origin) => AllowOrigin::exact(origin),
            None => AllowOrigin::any(),
        });

    Router::new()
        .route("/health", get(health::health))
        .merge(pricing::router())
        .nest(
            "/api/bookings",
            wizard::router(state.cache.bookings.clone()),
        )
        .nest(
            "/api/partner-applications",
            wizard::router(state.cache.partner_applications.clone()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
