// =============================================================================
// Risk / Volatility Analysis
// =============================================================================
//
// Components:
//   volatility   — population std-dev of simple close-to-close returns,
//                  annualized with sqrt(365) and expressed in percent.
//   volume_trend — recent (5-candle) volume vs the 20-candle volume SMA.
//   momentum     — full-window percentage price change.
//   risk_score   — weighted blend of the absolute components, clamped to
//                  0..=100: 50% volatility, 30% volume trend, 20% momentum.

use serde::{Deserialize, Serialize};

use crate::analysis::volume_trend;
use crate::candle::{closes, volumes, Candle};
use crate::error::Result;
use crate::stats::population_std_dev;

/// Trading days assumed per year when annualizing volatility.
const ANNUALIZATION_DAYS: f64 = 365.0;

/// Risk profile of a candle series. All fields are percentages except
/// `risk_score`, which is a 0..=100 composite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub volatility: f64,
    pub volume_trend: f64,
    pub momentum: f64,
    pub risk_score: f64,
}

/// Analyze volatility, volume behavior, and momentum of the series.
///
/// # Errors
/// Empty series or a non-finite close/volume field.
pub fn analyze_risk(candles: &[Candle]) -> Result<RiskAnalysis> {
    let prices = closes(candles)?;
    let vols = volumes(candles)?;

    // Simple returns, skipping any step whose base price is exactly zero.
    let returns: Vec<f64> = prices
        .windows(2)
        .filter(|pair| pair[0] != 0.0)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect();

    let volatility = population_std_dev(&returns) * ANNUALIZATION_DAYS.sqrt() * 100.0;
    let volume_trend = volume_trend(&vols);

    let first = prices[0];
    let last = *prices.last().expect("closes() returns a non-empty vec");
    let momentum = if first == 0.0 {
        0.0
    } else {
        (last - first) / first * 100.0
    };

    Ok(RiskAnalysis {
        volatility,
        volume_trend,
        momentum,
        risk_score: risk_score(volatility, volume_trend, momentum),
    })
}

/// Blend the absolute components into a 0..=100 score.
fn risk_score(volatility: f64, volume_trend: f64, momentum: f64) -> f64 {
    let vol_score = volatility.abs().min(100.0);
    let volume_score = volume_trend.abs().min(100.0);
    let momentum_score = momentum.abs().min(100.0);

    (vol_score * 0.5 + volume_score * 0.3 + momentum_score * 0.2).clamp(0.0, 100.0)
}
