// =============================================================================
// marketpulse-report — snapshot a klines JSON file
// =============================================================================
//
// Reads a file containing an exchange klines response (a JSON array of
// positional kline rows), runs the full market snapshot, and prints it as
// pretty JSON on stdout.
//
// Usage: marketpulse-report <klines.json>

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use marketpulse::{parse_klines, MarketSnapshot};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: marketpulse-report <klines.json>")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {path}"))?;
    let body: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("{path} is not valid JSON"))?;

    let candles = parse_klines(&body).with_context(|| format!("{path} is not a klines array"))?;
    if let Some(ts) = candles.last().and_then(|c| c.open_time_utc()) {
        info!(candles = candles.len(), last_open = %ts, "series loaded");
    } else {
        info!(candles = candles.len(), "series loaded");
    }

    let snapshot = MarketSnapshot::compute(&candles)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
