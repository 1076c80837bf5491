//! # numstats
//!
//! Descriptive statistics over a small collection of numbers, served as a
//! single HTTP endpoint.
//!
//! Clients send a `numbers` field, either a JSON array or a string of numbers
//! separated by commas and/or whitespace, and receive count, sum, mean,
//! median, min, max, population and sample standard deviation, and the sorted
//! input.
//!
//! ## Architecture
//!
//! - [`api`]: wire types shared by the core and the HTTP layer
//! - [`models`]: validated domain values
//! - [`services`]: number parsing and statistics computation
//! - [`config`]: server configuration (TOML file plus environment overrides)
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
