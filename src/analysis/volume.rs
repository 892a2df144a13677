// =============================================================================
// Volume Analysis
// =============================================================================
//
// volume_trend             — recent (5-candle) volume vs the 20-candle SMA.
// price_volume_correlation — Pearson correlation of closes against volumes
//                            over the whole window; 0 when either column is
//                            constant.
// abnormal_volume          — recent volume above mean + 2 sigma of the whole
//                            volume column.

use serde::{Deserialize, Serialize};

use crate::analysis::{recent_volume, volume_trend};
use crate::candle::{closes, volumes, Candle};
use crate::error::Result;
use crate::stats::{mean, pearson_correlation, population_std_dev};

/// Volume behavior of a candle series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAnalysis {
    pub volume_trend: f64,
    pub price_volume_correlation: f64,
    pub abnormal_volume: bool,
}

/// Analyze volume trend, price/volume correlation, and abnormal activity.
///
/// # Errors
/// Empty series or a non-finite close/volume field.
pub fn analyze_volume(candles: &[Candle]) -> Result<VolumeAnalysis> {
    let prices = closes(candles)?;
    let vols = volumes(candles)?;

    let threshold = mean(&vols) + 2.0 * population_std_dev(&vols);

    Ok(VolumeAnalysis {
        volume_trend: volume_trend(&vols),
        price_volume_correlation: pearson_correlation(&prices, &vols),
        abnormal_volume: recent_volume(&vols) > threshold,
    })
}
