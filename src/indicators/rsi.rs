// =============================================================================
// Relative Strength Index (RSI) — first-N average variant
// =============================================================================
//
// This variant averages only the FIRST `period` gains/losses instead of
// applying Wilder's rolling smoothing, and keeps the nominal period as the
// divisor even when fewer deltas exist. Downstream consumers depend on that
// exact behavior, so it is kept as-is.
//
//   RS  = avg_gain / avg_loss
//   RSI = 100 - 100 / (1 + RS)
//
// When avg_loss is zero, RS would be infinite; RSI reports exactly 100
// instead of propagating the division.

use crate::candle::{closes, Candle};
use crate::error::{AnalysisError, Result};

/// Standard RSI look-back.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Compute the RSI over the candle closes with the given look-back `period`.
///
/// # Errors
/// - [`AnalysisError::EmptySeries`] on an empty series.
/// - [`AnalysisError::ZeroPeriod`] when `period == 0`.
/// - [`AnalysisError::InvalidField`] on a non-finite close.
///
/// # Edge cases
/// - Fewer than `period + 1` closes: the available deltas are still summed
///   and divided by the nominal `period`.
/// - No losing deltas (monotone rise, or a single candle): RSI = 100.0.
pub fn rsi(candles: &[Candle], period: usize) -> Result<f64> {
    if period == 0 {
        return Err(AnalysisError::ZeroPeriod);
    }
    let prices = closes(candles)?;

    let mut sum_gain = 0.0;
    let mut sum_loss = 0.0;
    for pair in prices.windows(2).take(period) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            sum_gain += delta;
        } else {
            sum_loss += delta.abs();
        }
    }

    let avg_gain = sum_gain / period as f64;
    let avg_loss = sum_loss / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - 100.0 / (1.0 + rs))
}
