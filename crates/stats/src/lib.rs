//! Numeric helpers for the isotherm indicator generator.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Mean of the non-NaN entries of a slice.
///
/// Returns NaN when the slice is empty or every entry is NaN, so callers can
/// treat "no data" the same way as a missing cell. Infinite entries are kept
/// and propagate into the result.
pub fn nan_mean<'a, I>(data: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    for &x in data {
        if x.is_nan() {
            continue;
        }
        sum += x;
        n += 1;
    }
    if n == 0 {
        return f64::NAN;
    }
    sum / n as f64
}

/// Rounds `value` to `decimals` decimal places (half away from zero).
///
/// Non-finite values are returned unchanged.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Index of the axis entry closest to `target`.
///
/// Ties resolve to the lowest index. NaN entries are never selected.
/// Returns `None` for an empty axis, an all-NaN axis, or a non-finite target.
pub fn nearest_index(axis: &[f64], target: f64) -> Option<usize> {
    if !target.is_finite() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, &a) in axis.iter().enumerate() {
        let d = (a - target).abs();
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_nan_mean_skips_nan() {
        let data = [1.0, f64::NAN, 3.0];
        assert_relative_eq!(nan_mean(&data), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_mean_all_nan() {
        assert!(nan_mean(&[f64::NAN, f64::NAN]).is_nan());
    }

    #[test]
    fn test_nan_mean_empty() {
        let empty: [f64; 0] = [];
        assert!(nan_mean(&empty).is_nan());
    }

    #[test]
    fn test_nan_mean_infinite_propagates() {
        assert!(nan_mean(&[1.0, f64::INFINITY]).is_infinite());
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(3.14159, 2), 3.14);
        assert_eq!(round_dp(2.5, 0), 3.0);
        assert_eq!(round_dp(-2.5, 0), -3.0);
        assert_eq!(round_dp(1234.56789, 1), 1234.6);
        assert_eq!(round_dp(0.123456, 4), 0.1235);
    }

    #[test]
    fn test_round_dp_non_finite() {
        assert!(round_dp(f64::NAN, 2).is_nan());
        assert_eq!(round_dp(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn test_nearest_index_basic() {
        let axis = [-10.0, 0.0, 10.0];
        assert_eq!(nearest_index(&axis, 4.0), Some(1));
        assert_eq!(nearest_index(&axis, 6.0), Some(2));
        assert_eq!(nearest_index(&axis, -100.0), Some(0));
    }

    #[test]
    fn test_nearest_index_tie_takes_lowest() {
        let axis = [-10.0, 0.0, 10.0];
        assert_eq!(nearest_index(&axis, 5.0), Some(1));
        assert_eq!(nearest_index(&axis, -5.0), Some(0));
    }

    #[test]
    fn test_nearest_index_descending_axis() {
        let axis = [90.0, 45.0, 0.0, -45.0, -90.0];
        assert_eq!(nearest_index(&axis, 50.0), Some(1));
        assert_eq!(nearest_index(&axis, -80.0), Some(4));
    }

    #[test]
    fn test_nearest_index_ignores_nan() {
        let axis = [f64::NAN, 5.0, 20.0];
        assert_eq!(nearest_index(&axis, 0.0), Some(1));
    }

    #[test]
    fn test_nearest_index_empty() {
        assert_eq!(nearest_index(&[], 1.0), None);
        assert_eq!(nearest_index(&[f64::NAN], 1.0), None);
        assert_eq!(nearest_index(&[1.0], f64::NAN), None);
    }
}
