//! Number parsing: raw client input to [`ValidatedNumbers`].

use crate::api::RawInput;
use crate::models::ValidatedNumbers;

use super::error::{ParseError, ParseResult};

/// Resolve a [`RawInput`] into a validated, non-empty sequence.
///
/// Lists are taken as-is. Text is split on commas and runs of whitespace;
/// empty tokens are dropped, so `"1,,2"` and `",1,2,"` are both `[1, 2]`.
///
/// # Errors
/// - [`ParseError::InvalidToken`] at the first token that is not a finite number
/// - [`ParseError::EmptyInput`] when there is nothing to parse
pub fn parse(raw: RawInput) -> ParseResult<ValidatedNumbers> {
    match raw {
        RawInput::Sequence(values) => ValidatedNumbers::new(values),
        RawInput::Text(text) => parse_text(&text),
    }
}

/// Split text into number tokens. Commas count as whitespace.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn parse_text(text: &str) -> ParseResult<ValidatedNumbers> {
    let values = tokenize(text)
        .enumerate()
        .map(|(position, token)| parse_token(token, position))
        .collect::<Result<Vec<_>, _>>()?;

    ValidatedNumbers::new(values)
}

fn parse_token(token: &str, position: usize) -> ParseResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::invalid_token(token, position)),
    }
}
