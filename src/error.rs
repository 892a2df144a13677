// =============================================================================
// Engine error taxonomy
// =============================================================================
//
// Two families only (everything else is a defined constant, never an error):
//   1. Input validation — empty series, malformed kline rows, non-finite
//      numeric fields. These fail fast and are reported to the caller.
//   2. Bad parameters — a zero look-back period.
//
// Degenerate arithmetic (zero denominators, empty statistics windows) is NOT
// an error: each case resolves to a documented constant inside the engine so
// that no public result ever carries a NaN or infinity.

use thiserror::Error;

/// Errors reported by the analytics engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The candle series was empty. Every analysis needs at least one candle.
    #[error("empty candle series")]
    EmptySeries,

    /// A look-back period of zero was requested.
    #[error("look-back period must be non-zero")]
    ZeroPeriod,

    /// A kline row was not a JSON array.
    #[error("kline row {index} is not an array")]
    RowNotArray { index: usize },

    /// A kline row had too few fields to be a valid candle.
    #[error("kline row {index} has {got} fields, expected at least {expected}")]
    TruncatedRow {
        index: usize,
        expected: usize,
        got: usize,
    },

    /// A required numeric field failed to parse or was not finite.
    #[error("invalid {field} value in candle {index}: {value}")]
    InvalidField {
        field: &'static str,
        index: usize,
        value: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
