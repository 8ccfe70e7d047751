//! HTTP adapters - web form and REST API implementations.

pub mod numbers;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use numbers::{numbers_router, NumbersAppState};

/// Builds the full application router.
///
/// Mounts the number routes and `GET /health`, wrapped in request tracing
/// and a per-request timeout.
pub fn app_router(state: NumbersAppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(numbers_router())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe - returns OK while the process is serving.
async fn health_check() -> &'static str {
    "OK"
}
