//! Error types for number parsing.

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Client-side input errors.
///
/// Both variants are bad requests; neither is retried or recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing left after splitting, or an empty list.
    #[error("No numbers provided")]
    EmptyInput,

    /// A token that does not convert to a finite number.
    #[error(
        "Input must be numbers separated by commas/spaces (invalid token '{token}' at position {position})"
    )]
    InvalidToken { token: String, position: usize },
}

impl ParseError {
    /// Create an invalid token error.
    pub fn invalid_token(token: impl Into<String>, position: usize) -> Self {
        Self::InvalidToken {
            token: token.into(),
            position,
        }
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "EMPTY_INPUT",
            ParseError::InvalidToken { .. } => "INVALID_TOKEN",
        }
    }
}
