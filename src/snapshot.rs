// =============================================================================
// Market Snapshot — composite analysis with per-section fallbacks
// =============================================================================
//
// Bundles the indicator set (RSI / MACD / Bollinger) with the four analyses
// into one serializable report. Composing callers want a complete object
// even when one section cannot be computed, so each section independently
// falls back to a neutral default (logged at warn level) and only a fully
// empty series is a hard error.
//
// Neutral defaults: RSI 50, MACD all zero, Bollinger at +/-2% of the last
// close, zeroed analysis structs, trader levels at +/-5%.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::{
    analyze_risk, analyze_traders, analyze_trend, analyze_volume, RiskAnalysis, TradersAnalysis,
    TrendAnalysis, VolumeAnalysis,
};
use crate::candle::Candle;
use crate::error::{AnalysisError, Result};
use crate::indicators::{bollinger, macd, rsi, BollingerBands, Macd, DEFAULT_RSI_PERIOD};

const NEUTRAL_RSI: f64 = 50.0;
const FALLBACK_BAND_OFFSET: f64 = 0.02;

/// The oscillator block of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: f64,
    pub macd: Macd,
    pub bollinger: BollingerBands,
}

/// Full market analysis of one candle series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub indicators: IndicatorSet,
    pub risk_analysis: RiskAnalysis,
    pub trend_analysis: TrendAnalysis,
    pub volume_analysis: VolumeAnalysis,
    pub traders_analysis: TradersAnalysis,
}

impl MarketSnapshot {
    /// Compute every section over the series, substituting neutral defaults
    /// for sections that fail.
    ///
    /// # Errors
    /// An empty series, or a non-finite close on the final candle — without
    /// a usable current price there is nothing to anchor the fallbacks to.
    pub fn compute(candles: &[Candle]) -> Result<Self> {
        let last_close = candles.last().map(|c| c.close).ok_or(AnalysisError::EmptySeries)?;
        if !last_close.is_finite() {
            return Err(AnalysisError::InvalidField {
                field: "close",
                index: candles.len() - 1,
                value: last_close.to_string(),
            });
        }

        Ok(Self {
            indicators: IndicatorSet {
                rsi: section(
                    "rsi",
                    rsi(candles, DEFAULT_RSI_PERIOD),
                    NEUTRAL_RSI,
                ),
                macd: section(
                    "macd",
                    macd(candles),
                    Macd {
                        macd: 0.0,
                        signal: 0.0,
                        histogram: 0.0,
                    },
                ),
                bollinger: section(
                    "bollinger",
                    bollinger(candles),
                    BollingerBands {
                        upper: last_close * (1.0 + FALLBACK_BAND_OFFSET),
                        middle: last_close,
                        lower: last_close * (1.0 - FALLBACK_BAND_OFFSET),
                    },
                ),
            },
            risk_analysis: section("risk", analyze_risk(candles), RiskAnalysis::default()),
            trend_analysis: section("trend", analyze_trend(candles), TrendAnalysis::default()),
            volume_analysis: section("volume", analyze_volume(candles), VolumeAnalysis::default()),
            traders_analysis: section(
                "traders",
                analyze_traders(candles),
                TradersAnalysis::fallback(last_close),
            ),
        })
    }
}

/// Unwrap a section result, logging and substituting the fallback on error.
fn section<T>(name: &'static str, result: Result<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(section = name, error = %e, "analysis section failed, using fallback");
            fallback
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TrendDirection;
    use crate::candle::Candle;

    fn candles_from_closes(values: &[f64]) -> Vec<Candle> {
        values
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle::from_ohlcv(i as i64, c, c, c, c, 1000.0))
            .collect()
    }

    #[test]
    fn snapshot_empty_series_is_error() {
        assert_eq!(
            MarketSnapshot::compute(&[]).unwrap_err(),
            AnalysisError::EmptySeries
        );
    }

    #[test]
    fn snapshot_of_rising_market() {
        let closes: Vec<f64> = (100..=160).map(|i| i as f64).collect();
        let snapshot = MarketSnapshot::compute(&candles_from_closes(&closes)).unwrap();
        assert_eq!(snapshot.indicators.rsi, 100.0);
        assert_eq!(snapshot.trend_analysis.direction, TrendDirection::Up);
        assert!(snapshot.risk_analysis.momentum > 0.0);
        assert!(!snapshot.volume_analysis.abnormal_volume);
    }

    #[test]
    fn snapshot_falls_back_on_poisoned_volume() {
        // A NaN volume fails the risk/volume/traders sections but the close
        // column stays valid, so the price indicators still compute.
        let mut candles = candles_from_closes(&(1..=60).map(|i| i as f64).collect::<Vec<_>>());
        candles[30].volume = f64::NAN;

        let snapshot = MarketSnapshot::compute(&candles).unwrap();
        assert_eq!(snapshot.risk_analysis, RiskAnalysis::default());
        assert_eq!(snapshot.volume_analysis, VolumeAnalysis::default());
        // Traders fallback levels sit +/-5% around the last close (60).
        let [resistance, support] = snapshot.traders_analysis.significant_levels;
        assert!((resistance.price - 63.0).abs() < 1e-9);
        assert!((support.price - 57.0).abs() < 1e-9);
        // Price-only sections are unaffected.
        assert_eq!(snapshot.indicators.rsi, 100.0);
    }

    #[test]
    fn snapshot_serializes_with_service_field_names() {
        let snapshot = MarketSnapshot::compute(&candles_from_closes(&[100.0; 30])).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["riskAnalysis"]["riskScore"].is_number());
        assert!(json["volumeAnalysis"]["priceVolumeCorrelation"].is_number());
        assert!(json["tradersAnalysis"]["significantLevels"].is_array());
        assert!(json["trendAnalysis"]["direction"].is_string());
    }
}
