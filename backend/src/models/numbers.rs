//! Validated numeric input.

use serde::Serialize;

use crate::services::ParseError;

/// A non-empty, ordered sequence of finite numbers.
///
/// Instances are only produced by [`ValidatedNumbers::new`], so every value
/// has `len() >= 1` and only finite elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedNumbers(Vec<f64>);

impl ValidatedNumbers {
    /// Validate an already-parsed sequence.
    ///
    /// # Errors
    /// - [`ParseError::EmptyInput`] if `values` is empty
    /// - [`ParseError::InvalidToken`] for the first non-finite element
    pub fn new(values: Vec<f64>) -> Result<Self, ParseError> {
        if values.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if let Some((position, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ParseError::invalid_token(value.to_string(), position));
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for ValidatedNumbers {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for ValidatedNumbers {
    type Error = ParseError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
