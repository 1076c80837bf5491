//! Data Transfer Objects for the HTTP API.
//!
//! The statistics request/response types live in [`crate::api`] and are
//! re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::api::{RawInput, StatsRequest, StatsResult};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Path the request was routed on
    pub path: String,
    pub version: String,
}
