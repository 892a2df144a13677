// =============================================================================
// Shared statistics helpers
// =============================================================================
//
// All helpers are total: an empty slice yields 0 and a zero correlation
// denominator reports 0, so callers never see NaN or infinity. Standard
// deviation is the population form (divide by N, not N-1).

/// Arithmetic mean; 0.0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation over the whole slice; 0.0 when empty.
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Pearson correlation coefficient between two equal-length series.
///
/// Reports 0.0 when either series is constant (zero denominator) or when the
/// inputs produce a non-finite result. Panics in debug builds if the lengths
/// differ; callers always pass columns extracted from the same candle series.
pub(crate) fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    if x.is_empty() {
        return 0.0;
    }

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    let r = (n * sum_xy - sum_x * sum_y) / denominator;
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn std_dev_empty_is_zero() {
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn std_dev_constant_is_zero() {
        assert!(population_std_dev(&[7.0; 10]).abs() < 1e-12);
    }

    #[test]
    fn std_dev_population_form() {
        // Population std-dev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std_dev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_with_self_is_one() {
        let x: Vec<f64> = (1..=50).map(|i| i as f64).collect();
        assert!((pearson_correlation(&x, &x) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlation_with_negated_self_is_minus_one() {
        let x: Vec<f64> = (1..=50).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| -v).collect();
        assert!((pearson_correlation(&x, &y) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlation_with_constant_reports_zero() {
        let x: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let y = vec![5.0; 20];
        assert_eq!(pearson_correlation(&x, &y), 0.0);
    }

    #[test]
    fn correlation_empty_reports_zero() {
        assert_eq!(pearson_correlation(&[], &[]), 0.0);
    }
}
