// =============================================================================
// Moving Averages — SMA, EMA, windowed StdDev
// =============================================================================
//
// These are summary statistics, not running series: each returns the single
// most recent value, which is how the analyses consume them.
//
// Window semantics: when fewer than `period` values exist, SMA and StdDev
// shrink to the available window and average what is there instead of
// failing. EMA always folds over the full input, seeded with the first value:
//   multiplier = 2 / (period + 1)
//   ema_i      = value_i * multiplier + ema_{i-1} * (1 - multiplier)

/// Simple moving average of the last `period` values.
///
/// Shrinks to the full slice when `values.len() < period`.
///
/// # Edge cases
/// - empty input => `None`
/// - `period == 0` => `None` (division by zero guard)
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.is_empty() {
        return None;
    }
    let window = tail(values, period);
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Exponential moving average folded over the whole slice, seeded with
/// `values[0]`. Returns only the final smoothed value.
///
/// # Edge cases
/// - empty input => `None`
/// - `period == 0` => `None`
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.is_empty() {
        return None;
    }
    let multiplier = 2.0 / (period + 1) as f64;

    let mut smoothed = values[0];
    for &value in &values[1..] {
        smoothed = value * multiplier + smoothed * (1.0 - multiplier);
    }
    Some(smoothed)
}

/// Population standard deviation (divide by N) over the last `period`
/// values, using that window's own mean. Shrinks like [`sma`].
pub fn std_dev(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.is_empty() {
        return None;
    }
    let window = tail(values, period);
    let mean = window.iter().sum::<f64>() / window.len() as f64;
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / window.len() as f64;
    Some(variance.sqrt())
}

/// Last `period` elements, or the whole slice when it is shorter.
fn tail(values: &[f64], period: usize) -> &[f64] {
    let start = values.len().saturating_sub(period);
    &values[start..]
}
