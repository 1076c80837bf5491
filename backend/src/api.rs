//! Public API surface for the statistics service.
//!
//! This file consolidates the request/response types for the HTTP API.
//! Field names and casing of [`StatsResult`] are part of the external contract
//! and must not change.

pub use crate::models::ValidatedNumbers;
pub use crate::services::ParseError;

use serde::{Deserialize, Serialize};

/// The raw `numbers` field as sent by a client.
///
/// Resolved into [`ValidatedNumbers`] by [`crate::services::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// Already-structured list of numbers.
    Sequence(Vec<f64>),
    /// Free-form text with numbers separated by commas and/or whitespace.
    Text(String),
}

impl From<Vec<f64>> for RawInput {
    fn from(values: Vec<f64>) -> Self {
        RawInput::Sequence(values)
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_string())
    }
}

/// Request body for the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRequest {
    pub numbers: RawInput,
}

/// Descriptive statistics for one collection of numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub stdev_population: f64,
    /// Undefined statistic for a single value: `f64::NAN` in memory,
    /// `null` on the wire.
    #[serde(with = "undefined_as_null")]
    pub stdev_sample: f64,
    #[serde(rename = "sorted")]
    pub sorted_values: Vec<f64>,
}

/// JSON has no NaN, so undefined statistics travel as `null`.
mod undefined_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
