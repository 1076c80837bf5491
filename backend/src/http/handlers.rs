//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Uri,
    Json,
};
use tracing::debug;

use super::dto::{HealthResponse, StatsRequest, StatsResult};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /, /health, /api/stats
///
/// Liveness probe. Echoes the routed path to help validate proxy rewrites.
pub async fn health_check(State(state): State<AppState>, uri: Uri) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        path: uri.path().to_string(),
        version: state.version.to_string(),
    })
}

// =============================================================================
// Statistics
// =============================================================================

/// POST /, /api/stats
///
/// Compute descriptive statistics for the `numbers` field.
pub async fn compute_stats(
    payload: Result<Json<StatsRequest>, JsonRejection>,
) -> HandlerResult<StatsResult> {
    let Json(request) = payload.inspect_err(|e| debug!(error = %e, "rejected request body"))?;

    let stats = services::describe(request.numbers)
        .inspect_err(|e| debug!(error = %e, "rejected numbers"))?;

    Ok(Json(stats))
}
