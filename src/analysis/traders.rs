// =============================================================================
// Trader / Whale Analysis
// =============================================================================
//
// Whale moves: candles whose volume exceeds mean + 2 sigma of the whole
// volume column.
//
// Significant levels: scan interior closes (a 20-bar margin on each side) for
// local extrema over a +/-20-bar neighborhood, restricted to prices within
// +/-10% of the last close. A close strictly above both neighborhood maxima
// is resistance; strictly below both minima is support. The result is always
// exactly two levels — the nearest resistance above and the nearest support
// below the current price — synthesized at +/-5% when the scan finds none.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candle::{closes, volumes, Candle};
use crate::error::Result;
use crate::stats::{mean, population_std_dev};

/// Neighborhood half-width for the local-extremum scan.
const LEVEL_WINDOW: usize = 20;
/// Levels are only considered within this fraction of the current price.
const PRICE_BAND: f64 = 0.10;
/// Synthesized fallback levels sit this fraction away from the current price.
const DEFAULT_LEVEL_OFFSET: f64 = 0.05;

/// Whether a level acts as a floor or a ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    Support,
    Resistance,
}

impl std::fmt::Display for LevelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Support => write!(f, "support"),
            Self::Resistance => write!(f, "resistance"),
        }
    }
}

/// A detected (or synthesized) price level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: LevelKind,
}

/// Whale activity plus the two nearest significant levels, resistance first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradersAnalysis {
    pub whale_movements: usize,
    pub average_whale_volume: f64,
    pub significant_levels: [PriceLevel; 2],
}

impl TradersAnalysis {
    /// Neutral fallback around `current_price`: no whale activity, default
    /// levels at +/-5%. Used when a composing caller cannot run the full
    /// analysis.
    pub fn fallback(current_price: f64) -> Self {
        Self {
            whale_movements: 0,
            average_whale_volume: 0.0,
            significant_levels: default_levels(current_price),
        }
    }
}

/// Analyze whale-sized volume and significant price levels.
///
/// # Errors
/// Empty series or a non-finite close/volume field.
pub fn analyze_traders(candles: &[Candle]) -> Result<TradersAnalysis> {
    let prices = closes(candles)?;
    let vols = volumes(candles)?;
    let current_price = *prices.last().expect("closes() returns a non-empty vec");

    let whale_threshold = mean(&vols) + 2.0 * population_std_dev(&vols);
    let whale_volumes: Vec<f64> = vols.iter().copied().filter(|v| *v > whale_threshold).collect();
    let average_whale_volume = if whale_volumes.is_empty() {
        0.0
    } else {
        mean(&whale_volumes)
    };

    Ok(TradersAnalysis {
        whale_movements: whale_volumes.len(),
        average_whale_volume,
        significant_levels: significant_levels(&prices, current_price),
    })
}

/// Nearest resistance above and support below `current_price`, scanned from
/// local extrema of the close series. Always returns two levels, resistance
/// first.
fn significant_levels(prices: &[f64], current_price: f64) -> [PriceLevel; 2] {
    let min_price = current_price * (1.0 - PRICE_BAND);
    let max_price = current_price * (1.0 + PRICE_BAND);

    let mut levels: Vec<PriceLevel> = Vec::new();
    let upper = prices.len().saturating_sub(LEVEL_WINDOW);
    for i in LEVEL_WINDOW..upper {
        let price = prices[i];
        if price < min_price || price > max_price {
            continue;
        }

        let left = &prices[i - LEVEL_WINDOW..i];
        let right = &prices[i + 1..i + LEVEL_WINDOW + 1];

        if price > slice_max(left) && price > slice_max(right) {
            levels.push(PriceLevel {
                price,
                kind: LevelKind::Resistance,
            });
        }
        if price < slice_min(left) && price < slice_min(right) {
            levels.push(PriceLevel {
                price,
                kind: LevelKind::Support,
            });
        }
    }

    levels.sort_by(|a, b| a.price.total_cmp(&b.price));

    // Highest support below the current price; ascending order makes that the
    // last match.
    let support = levels
        .iter()
        .rev()
        .find(|l| l.kind == LevelKind::Support && l.price < current_price)
        .copied();
    // Lowest resistance above the current price.
    let resistance = levels
        .iter()
        .find(|l| l.kind == LevelKind::Resistance && l.price > current_price)
        .copied();

    if support.is_none() || resistance.is_none() {
        debug!(
            current_price,
            detected = levels.len(),
            "no usable support/resistance detected, synthesizing defaults"
        );
    }

    let defaults = default_levels(current_price);
    [resistance.unwrap_or(defaults[0]), support.unwrap_or(defaults[1])]
}

fn default_levels(current_price: f64) -> [PriceLevel; 2] {
    [
        PriceLevel {
            price: current_price * (1.0 + DEFAULT_LEVEL_OFFSET),
            kind: LevelKind::Resistance,
        },
        PriceLevel {
            price: current_price * (1.0 - DEFAULT_LEVEL_OFFSET),
            kind: LevelKind::Support,
        },
    ]
}

fn slice_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn slice_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
