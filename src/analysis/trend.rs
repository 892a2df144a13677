// =============================================================================
// Trend Analysis
// =============================================================================
//
// Direction: strict comparison of the 20- and 50-period EMAs over the full
// close series (equal EMAs read as SIDEWAYS).
//
// Strength: slide a 5-bar look-back from index 5 to the end; count bars whose
// high beats the max of the previous 5 highs and bars whose low undercuts the
// min of the previous 5 lows. Strength is that count over 2x the series
// length, in percent, so a series making new extremes every bar approaches
// 100.

use serde::{Deserialize, Serialize};

use crate::candle::{closes, highs, lows, Candle};
use crate::error::Result;
use crate::indicators::ma::ema;

const FAST_EMA_PERIOD: usize = 20;
const SLOW_EMA_PERIOD: usize = 50;
const SWING_LOOKBACK: usize = 5;

/// Which way the EMAs point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Sideways,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
            Self::Sideways => write!(f, "SIDEWAYS"),
        }
    }
}

/// Direction plus strength and momentum, both in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    pub strength: f64,
    pub momentum: f64,
}

/// Analyze trend direction, strength, and momentum of the series.
///
/// # Errors
/// Empty series or a non-finite close/high/low field.
pub fn analyze_trend(candles: &[Candle]) -> Result<TrendAnalysis> {
    let close_prices = closes(candles)?;
    let high_prices = highs(candles)?;
    let low_prices = lows(candles)?;

    // closes() guarantees a non-empty series.
    let fast = ema(&close_prices, FAST_EMA_PERIOD).unwrap_or(0.0);
    let slow = ema(&close_prices, SLOW_EMA_PERIOD).unwrap_or(0.0);

    let direction = if fast > slow {
        TrendDirection::Up
    } else if fast < slow {
        TrendDirection::Down
    } else {
        TrendDirection::Sideways
    };

    let first = close_prices[0];
    let last = *close_prices.last().expect("closes() returns a non-empty vec");
    let momentum = if first == 0.0 {
        0.0
    } else {
        (last - first) / first * 100.0
    };

    let mut higher_highs = 0usize;
    let mut lower_lows = 0usize;
    for i in SWING_LOOKBACK..candles.len() {
        let prev_high = slice_max(&high_prices[i - SWING_LOOKBACK..i]);
        let prev_low = slice_min(&low_prices[i - SWING_LOOKBACK..i]);
        if high_prices[i] > prev_high {
            higher_highs += 1;
        }
        if low_prices[i] < prev_low {
            lower_lows += 1;
        }
    }
    let strength = (higher_highs + lower_lows) as f64 / (candles.len() as f64 * 2.0) * 100.0;

    Ok(TrendAnalysis {
        direction,
        strength,
        momentum,
    })
}

fn slice_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn slice_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
