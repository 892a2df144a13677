// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free summary indicators over a candle series. The moving
// averages operate on raw `&[f64]` columns and return `Option` so callers
// handle empty input explicitly; the candle-level oscillators return
// `Result` and fail fast on validation problems.

pub mod bollinger;
pub mod ma;
pub mod macd;
pub mod rsi;

pub use bollinger::{bollinger, BollingerBands};
pub use ma::{ema, sma, std_dev};
pub use macd::{macd, Macd};
pub use rsi::{rsi, DEFAULT_RSI_PERIOD};
