//! Service layer for number parsing and statistics computation.
//!
//! The HTTP layer only talks to [`describe`]; [`parse`] and [`compute`] are
//! exposed for callers that already hold validated input.

pub mod error;
pub mod parser;
pub mod statistics;


pub use error::{ParseError, ParseResult};
pub use parser::{parse, tokenize};
pub use statistics::compute;

use tracing::debug;

use crate::api::{RawInput, StatsResult};

/// Parse the raw input and compute its statistics.
///
/// Either the full result or a single [`ParseError`] is returned; there are
/// no partial results.
pub fn describe(raw: RawInput) -> ParseResult<StatsResult> {
    let values = parse(raw)?;
    let result = compute(&values);
    debug!(count = result.count, "computed descriptive statistics");
    Ok(result)
}
