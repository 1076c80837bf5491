//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
    /// Crate version reported by the health endpoint
    pub version: &'static str,
}

impl AppState {
    /// Create a new application state from a loaded configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
