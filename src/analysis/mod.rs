// =============================================================================
// Market Analysis Module
// =============================================================================
//
// Higher-level analyses built on the indicator primitives. Each submodule
// exposes one result struct and one `analyze_*` entry point taking the full
// candle series. All share the same failure semantics: a malformed candle
// aborts the whole analysis with a validation error; degenerate arithmetic
// resolves to defined constants.

pub mod risk;
pub mod traders;
pub mod trend;
pub mod volume;

pub use risk::{analyze_risk, RiskAnalysis};
pub use traders::{analyze_traders, LevelKind, PriceLevel, TradersAnalysis};
pub use trend::{analyze_trend, TrendAnalysis, TrendDirection};
pub use volume::{analyze_volume, VolumeAnalysis};

use crate::indicators::ma::sma;
use crate::stats::mean;

/// Baseline window for the volume SMA.
const VOLUME_SMA_PERIOD: usize = 20;
/// Number of most recent candles treated as "current" activity.
const RECENT_WINDOW: usize = 5;

/// Mean of the last [`RECENT_WINDOW`] values (fewer when the series is
/// shorter).
pub(crate) fn recent_volume(volumes: &[f64]) -> f64 {
    let start = volumes.len().saturating_sub(RECENT_WINDOW);
    mean(&volumes[start..])
}

/// Percentage change of recent volume against the 20-candle volume SMA.
/// Reports 0 when the baseline SMA is zero.
pub(crate) fn volume_trend(volumes: &[f64]) -> f64 {
    let baseline = sma(volumes, VOLUME_SMA_PERIOD).unwrap_or(0.0);
    if baseline == 0.0 {
        return 0.0;
    }
    (recent_volume(volumes) - baseline) / baseline * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_trend_flat_volumes_is_zero() {
        let volumes = vec![1000.0; 40];
        assert!(volume_trend(&volumes).abs() < 1e-9);
    }

    #[test]
    fn volume_trend_recent_spike_is_positive() {
        let mut volumes = vec![1000.0; 40];
        for v in volumes.iter_mut().rev().take(5) {
            *v = 3000.0;
        }
        assert!(volume_trend(&volumes) > 0.0);
    }

    #[test]
    fn volume_trend_zero_baseline_reports_zero() {
        assert_eq!(volume_trend(&[0.0; 10]), 0.0);
    }

    #[test]
    fn recent_volume_shrinks_short_series() {
        assert!((recent_volume(&[4.0, 8.0]) - 6.0).abs() < 1e-12);
    }
}
