//! HTTP server module for the statistics service.
//!
//! This module provides an axum-based HTTP server that exposes the service
//! layer as a small REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, request ids, error handling         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Number parsing                                         │
//! │  - Statistics computation                                 │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
