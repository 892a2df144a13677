// =============================================================================
// marketpulse — OHLCV candle analytics engine
// =============================================================================
//
// Pure, synchronous, stateless computations over a caller-owned candle
// series: moving-average indicators (SMA/EMA/StdDev, RSI, MACD, Bollinger
// Bands) and higher-level market analyses (risk/volatility, trend, volume,
// whale activity with support/resistance levels), plus a composite snapshot
// with per-section fallbacks.
//
// The series is never mutated and nothing is cached between calls, so any
// number of analyses may run concurrently without coordination. Fetching the
// candles (exchange clients) and rendering the results (formatters) are the
// caller's business.

pub mod analysis;
pub mod candle;
pub mod error;
pub mod indicators;
pub mod snapshot;

mod stats;

pub use analysis::{
    analyze_risk, analyze_traders, analyze_trend, analyze_volume, LevelKind, PriceLevel,
    RiskAnalysis, TradersAnalysis, TrendAnalysis, TrendDirection, VolumeAnalysis,
};
pub use candle::{parse_klines, Candle};
pub use error::{AnalysisError, Result};
pub use indicators::{
    bollinger, ema, macd, rsi, sma, std_dev, BollingerBands, Macd, DEFAULT_RSI_PERIOD,
};
pub use snapshot::{IndicatorSet, MarketSnapshot};
