//! Numeric helpers shared by the stress laws, the geotherm and the profile builder.

/// Assert that the percentage deviation between two values is below a threshold
///
/// Calculates the deviation of `actual` from `expected` (relative to `expected`)
/// and panics when it reaches `max_deviation` percent.
///
/// # Examples
/// ```
/// use lith_strength::assert_deviation;
///
/// assert_deviation!(7.9e7, 7.89e7, 1.0);
/// ```
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if !(actual_deviation < max_dev) {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if !(actual_deviation < max_dev) {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Linear interpolation between two values
///
/// # Examples
/// ```
/// use lith_strength::math_utils::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(300.0, 1300.0, 0.25), 550.0);
/// ```
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Inverse linear interpolation - the ratio at which `value` sits between `a` and `b`
///
/// Returns 0.0 for a degenerate interval.
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < f64::EPSILON {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// `count` evenly spaced values from `start` to `stop`, both ends included.
///
/// # Examples
/// ```
/// use lith_strength::math_utils::linspace;
///
/// assert_eq!(linspace(0.0, 100.0, 5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
/// ```
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| lerp(start, stop, i as f64 / last))
                .collect()
        }
    }
}

/// Piecewise-linear interpolation of `x` over ascending knots `xs` -> `ys`.
///
/// Outside the knot range the end values are held. Returns NaN for an empty table.
pub fn interp(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }
    // first knot strictly above x; x is inside (xs[0], xs[n-1])
    let upper = xs[..n].partition_point(|&k| k <= x);
    let lower = upper - 1;
    lerp(ys[lower], ys[upper], inverse_lerp(xs[lower], xs[upper], x))
}

/// Minimum of the non-NaN values, or NaN when every value is NaN.
///
/// # Examples
/// ```
/// use lith_strength::math_utils::nan_min;
///
/// assert_eq!(nan_min([3.0, f64::NAN, 1.0]), 1.0);
/// assert!(nan_min([f64::NAN, f64::NAN]).is_nan());
/// ```
pub fn nan_min<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, |acc, v| if acc.is_nan() || v < acc { v } else { acc })
}

/// Calculate the percentage deviation of `actual` from `expected`
///
/// # Examples
/// ```
/// use lith_strength::math_utils::deviation;
///
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// assert_eq!(deviation(95.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(100.0, 200.0, 0.25), 125.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(100.0, 200.0, 150.0), 0.5);
        assert_eq!(inverse_lerp(100.0, 200.0, 200.0), 1.0);
        assert_eq!(inverse_lerp(5.0, 5.0, 7.0), 0.0);
    }

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);

        let zs = linspace(0.0, 100_000.0, 1000);
        assert_eq!(zs.len(), 1000);
        assert_eq!(zs[0], 0.0);
        assert_abs_diff_eq!(zs[999], 100_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(zs[1] - zs[0], 100_000.0 / 999.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interp_inside_and_clamped() {
        let xs = [0.0, 10.0, 30.0];
        let ys = [300.0, 500.0, 700.0];

        assert_abs_diff_eq!(interp(5.0, &xs, &ys), 400.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp(20.0, &xs, &ys), 600.0, epsilon = 1e-12);
        assert_eq!(interp(10.0, &xs, &ys), 500.0);

        // held at the ends
        assert_eq!(interp(-5.0, &xs, &ys), 300.0);
        assert_eq!(interp(99.0, &xs, &ys), 700.0);

        assert!(interp(1.0, &[], &[]).is_nan());
    }

    #[test]
    fn test_nan_min_ignores_missing_values() {
        assert_eq!(nan_min([2.0, 1.0, 3.0]), 1.0);
        assert_eq!(nan_min([f64::NAN, 4.0]), 4.0);
        assert_eq!(nan_min([4.0, f64::NAN]), 4.0);
        assert_eq!(nan_min([-1.0, f64::NAN, f64::INFINITY]), -1.0);
        assert!(nan_min([f64::NAN]).is_nan());
        assert!(nan_min(Vec::<f64>::new()).is_nan());
    }

    #[test]
    fn test_deviation() {
        assert_eq!(deviation(100.0, 100.0), 0.0);
        assert!((deviation(1530.0, 1500.0) - 2.0).abs() < 0.001);
        assert_eq!(deviation(0.0, 0.0), 0.0);
        assert_eq!(deviation(10.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_assert_deviation_macro() {
        assert_deviation!(105.0, 100.0, 10.0);
        assert_deviation!(1530.0, 1500.0, 5.0, "Temperature should be within 5%");
    }

    #[test]
    #[should_panic(expected = "assertion failed: deviation")]
    fn test_assert_deviation_macro_fails() {
        assert_deviation!(120.0, 100.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "assertion failed: deviation")]
    fn test_assert_deviation_macro_fails_on_nan() {
        assert_deviation!(f64::NAN, 100.0, 10.0);
    }
}
