//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! request ids, panic recovery), and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::cors::cors_layer;
use super::error::panic_response;
use super::handlers;
use super::state::AppState;

/// Path the statistics endpoint is mounted on behind a proxy.
pub const STATS_PATH: &str = "/api/stats";

/// Dedicated health probe path.
pub const HEALTH_PATH: &str = "/health";

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let body_limit = state.config.server.body_limit_bytes;

    // The same endpoint answers at the root (direct access) and under the
    // proxy prefix, with or without a trailing slash.
    let stats_endpoint = get(handlers::health_check).post(handlers::compute_stats);

    Router::new()
        .route("/", stats_endpoint.clone())
        .route(STATS_PATH, stats_endpoint.clone())
        .route("/api/stats/", stats_endpoint)
        .route(HEALTH_PATH, get(handlers::health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
