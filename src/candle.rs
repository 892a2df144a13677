// =============================================================================
// Candle data model and kline-row parsing
// =============================================================================
//
// The exchange delivers klines as an array of positional arrays:
//   [0] openTime, [1] open, [2] high, [3] low, [4] close, [5] volume,
//   [6] closeTime, [7] quoteAssetVolume, [8] numberOfTrades,
//   [9] takerBuyBaseVolume, [10] takerBuyQuoteVolume
//
// Numeric fields arrive as JSON strings ("42513.70") or plain numbers; both
// are accepted. The engine only consumes OHLCV, but the full row is retained
// so a parsed series can round-trip through serde without losing fields.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Minimum number of fields a kline row must carry.
const KLINE_ROW_FIELDS: usize = 11;

/// A single OHLCV candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
    pub quote_volume: f64,
    pub trades_count: u64,
    pub taker_buy_volume: f64,
    pub taker_buy_quote_volume: f64,
}

impl Candle {
    /// Build a candle from the OHLCV fields alone; the remaining kline fields
    /// are zeroed. Handy for synthetic data (e.g. a single-price fallback
    /// candle with `open == high == low == close` and zero volume).
    pub fn from_ohlcv(open_time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            close_time: 0,
            quote_volume: 0.0,
            trades_count: 0,
            taker_buy_volume: 0.0,
            taker_buy_quote_volume: 0.0,
        }
    }

    /// Parse one positional kline row.
    ///
    /// `index` is the row's position in the enclosing array and is only used
    /// for error reporting.
    pub fn from_kline_row(row: &serde_json::Value, index: usize) -> Result<Self> {
        let arr = row
            .as_array()
            .ok_or(AnalysisError::RowNotArray { index })?;

        if arr.len() < KLINE_ROW_FIELDS {
            return Err(AnalysisError::TruncatedRow {
                index,
                expected: KLINE_ROW_FIELDS,
                got: arr.len(),
            });
        }

        Ok(Self {
            open_time: arr[0].as_i64().unwrap_or(0),
            open: parse_f64(&arr[1], "open", index)?,
            high: parse_f64(&arr[2], "high", index)?,
            low: parse_f64(&arr[3], "low", index)?,
            close: parse_f64(&arr[4], "close", index)?,
            volume: parse_f64(&arr[5], "volume", index)?,
            close_time: arr[6].as_i64().unwrap_or(0),
            quote_volume: parse_f64(&arr[7], "quote_volume", index)?,
            trades_count: arr[8].as_u64().unwrap_or(0),
            taker_buy_volume: parse_f64(&arr[9], "taker_buy_volume", index)?,
            taker_buy_quote_volume: parse_f64(&arr[10], "taker_buy_quote_volume", index)?,
        })
    }

    /// Candle open time as UTC, `None` when the timestamp is out of range.
    pub fn open_time_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.open_time).single()
    }

    /// Candle close time as UTC, `None` when the timestamp is out of range.
    pub fn close_time_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.close_time).single()
    }
}

/// Parse a full klines response body (a JSON array of rows) into a candle
/// series, preserving order.
pub fn parse_klines(body: &serde_json::Value) -> Result<Vec<Candle>> {
    let rows = body.as_array().ok_or(AnalysisError::EmptySeries)?;
    if rows.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }

    let mut candles = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        candles.push(Candle::from_kline_row(row, i)?);
    }
    Ok(candles)
}

/// Accept either a JSON string ("0.0015") or a bare number.
fn parse_f64(value: &serde_json::Value, field: &'static str, index: usize) -> Result<f64> {
    let parsed = match value {
        serde_json::Value::String(s) => s.parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(AnalysisError::InvalidField {
            field,
            index,
            value: value.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Validated field extraction
// ---------------------------------------------------------------------------
//
// Every analysis starts by pulling one price/volume column out of the series.
// A non-finite value anywhere aborts the whole computation with a validation
// error rather than poisoning downstream statistics.

fn extract(candles: &[Candle], field: &'static str, get: impl Fn(&Candle) -> f64) -> Result<Vec<f64>> {
    if candles.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    let mut values = Vec::with_capacity(candles.len());
    for (i, candle) in candles.iter().enumerate() {
        let v = get(candle);
        if !v.is_finite() {
            return Err(AnalysisError::InvalidField {
                field,
                index: i,
                value: v.to_string(),
            });
        }
        values.push(v);
    }
    Ok(values)
}

/// Close prices, oldest first. Errors on an empty series or non-finite close.
pub fn closes(candles: &[Candle]) -> Result<Vec<f64>> {
    extract(candles, "close", |c| c.close)
}

/// High prices, oldest first.
pub fn highs(candles: &[Candle]) -> Result<Vec<f64>> {
    extract(candles, "high", |c| c.high)
}

/// Low prices, oldest first.
pub fn lows(candles: &[Candle]) -> Result<Vec<f64>> {
    extract(candles, "low", |c| c.low)
}

/// Traded volumes, oldest first.
pub fn volumes(candles: &[Candle]) -> Result<Vec<f64>> {
    extract(candles, "volume", |c| c.volume)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> serde_json::Value {
        json!([
            1700000000000_i64,
            "42500.10",
            "42800.00",
            "42400.50",
            "42650.75",
            "123.456",
            1700003599999_i64,
            "5263847.11",
            8421,
            "61.2",
            "2609112.40"
        ])
    }

    #[test]
    fn parses_string_fields() {
        let candle = Candle::from_kline_row(&sample_row(), 0).unwrap();
        assert_eq!(candle.open_time, 1700000000000);
        assert!((candle.open - 42500.10).abs() < 1e-9);
        assert!((candle.close - 42650.75).abs() < 1e-9);
        assert!((candle.volume - 123.456).abs() < 1e-9);
        assert_eq!(candle.trades_count, 8421);
    }

    #[test]
    fn parses_numeric_fields() {
        let row = json!([0, 1.0, 2.0, 0.5, 1.5, 10.0, 0, 15.0, 3, 5.0, 7.5]);
        let candle = Candle::from_kline_row(&row, 0).unwrap();
        assert!((candle.high - 2.0).abs() < 1e-12);
        assert!((candle.low - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_array_row() {
        let err = Candle::from_kline_row(&json!({"open": 1.0}), 3).unwrap_err();
        assert_eq!(err, AnalysisError::RowNotArray { index: 3 });
    }

    #[test]
    fn rejects_truncated_row() {
        let err = Candle::from_kline_row(&json!([1, "2", "3"]), 0).unwrap_err();
        assert!(matches!(err, AnalysisError::TruncatedRow { got: 3, .. }));
    }

    #[test]
    fn rejects_unparsable_close() {
        let mut row = sample_row();
        row[4] = json!("not-a-price");
        let err = Candle::from_kline_row(&row, 7).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidField {
                field: "close",
                index: 7,
                ..
            }
        ));
    }

    #[test]
    fn parse_klines_preserves_order() {
        let body = json!([sample_row(), sample_row()]);
        let candles = parse_klines(&body).unwrap();
        assert_eq!(candles.len(), 2);
    }

    #[test]
    fn parse_klines_empty_is_error() {
        assert_eq!(parse_klines(&json!([])).unwrap_err(), AnalysisError::EmptySeries);
    }

    #[test]
    fn extraction_rejects_nan() {
        let mut candle = Candle::from_ohlcv(0, 1.0, 2.0, 0.5, 1.5, 10.0);
        candle.close = f64::NAN;
        let err = closes(&[candle]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidField { field: "close", .. }));
    }

    #[test]
    fn extraction_rejects_empty_series() {
        assert_eq!(volumes(&[]).unwrap_err(), AnalysisError::EmptySeries);
    }

    #[test]
    fn open_time_utc_roundtrip() {
        let candle = Candle::from_ohlcv(1700000000000, 1.0, 1.0, 1.0, 1.0, 0.0);
        let ts = candle.open_time_utc().unwrap();
        assert_eq!(ts.timestamp_millis(), 1700000000000);
    }
}
