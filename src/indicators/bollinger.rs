// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band: SMA(closes, 20). Upper/lower: middle ± 2σ, where σ is the
// population standard deviation over the same 20-close window. Both the SMA
// and σ shrink to the available window on short series, so the bands are
// defined for any non-empty input.

use serde::{Deserialize, Serialize};

use crate::candle::{closes, Candle};
use crate::error::Result;
use crate::indicators::ma::{sma, std_dev};

const BAND_PERIOD: usize = 20;
const STD_DEV_MULTIPLIER: f64 = 2.0;

/// Upper, middle, and lower band values. `upper >= middle >= lower` always
/// holds since the standard deviation is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Compute the Bollinger Bands over the candle closes.
///
/// # Errors
/// Empty series or non-finite close.
pub fn bollinger(candles: &[Candle]) -> Result<BollingerBands> {
    let prices = closes(candles)?;

    // closes() guarantees a non-empty series.
    let middle = sma(&prices, BAND_PERIOD).unwrap_or(0.0);
    let sigma = std_dev(&prices, BAND_PERIOD).unwrap_or(0.0);

    Ok(BollingerBands {
        upper: middle + STD_DEV_MULTIPLIER * sigma,
        middle,
        lower: middle - STD_DEV_MULTIPLIER * sigma,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::candle::Candle;
    use crate::error::AnalysisError;

    fn candles_from_closes(values: &[f64]) -> Vec<Candle> {
        values
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle::from_ohlcv(i as i64, close, close, close, close, 1000.0))
            .collect()
    }

    #[test]
    fn bollinger_empty_series() {
        assert_eq!(bollinger(&[]).unwrap_err(), AnalysisError::EmptySeries);
    }

    #[test]
    fn bollinger_band_ordering() {
        let values: Vec<f64> = (1..=40).map(|i| (i as f64) * 1.3 + 10.0).collect();
        let bands = bollinger(&candles_from_closes(&values)).unwrap();
        assert!(bands.upper >= bands.middle);
        assert!(bands.middle >= bands.lower);
    }

    #[test]
    fn bollinger_flat_series_collapses() {
        let bands = bollinger(&candles_from_closes(&[100.0; 30])).unwrap();
        assert!((bands.upper - 100.0).abs() < 1e-12);
        assert!((bands.middle - 100.0).abs() < 1e-12);
        assert!((bands.lower - 100.0).abs() < 1e-12);
    }

    #[test]
    fn bollinger_known_window() {
        // 25 values 1..=25; window is the last 20 (6..=25): mean 15.5,
        // population variance = (20^2 - 1) / 12 = 33.25.
        let values: Vec<f64> = (1..=25).map(|i| i as f64).collect();
        let bands = bollinger(&candles_from_closes(&values)).unwrap();
        let sigma = (33.25_f64).sqrt();
        assert!((bands.middle - 15.5).abs() < 1e-9);
        assert!((bands.upper - (15.5 + 2.0 * sigma)).abs() < 1e-9);
        assert!((bands.lower - (15.5 - 2.0 * sigma)).abs() < 1e-9);
    }

    #[test]
    fn bollinger_short_series_shrinks_window() {
        // 3 closes against the 20 period: mean 2, sigma sqrt(2/3).
        let bands = bollinger(&candles_from_closes(&[1.0, 2.0, 3.0])).unwrap();
        let sigma = (2.0_f64 / 3.0).sqrt();
        assert!((bands.middle - 2.0).abs() < 1e-12);
        assert!((bands.upper - (2.0 + 2.0 * sigma)).abs() < 1e-12);
    }
}
