//! Small numeric helpers shared by the atmosphere components
//!
//! Linear interpolation between two scalars, uniform grids, and the
//! percentage-deviation assertion used throughout the tests.

/// Assert that the percentage deviation between two values is below a threshold
///
/// Computes `deviation(actual, expected)` and panics when it is not strictly
/// less than `max_deviation` (in percent). An optional trailing format string
/// is appended to the panic message.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
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

            if actual_deviation >= max_dev {
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
/// use grey_atmosphere::math_utils::lerp;
///
/// // Hopf function halfway down the log-tau range
/// let hopf = lerp(0.55, 0.71, 0.5);
/// assert!((hopf - 0.63).abs() < 1e-12);
/// ```
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Inverse linear interpolation - the ratio that maps `value` back onto `[a, b]`
///
/// Returns 0.0 for a degenerate range.
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < f64::EPSILON {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// `count` evenly spaced points from `start` to `end` inclusive
///
/// # Examples
/// ```
/// use grey_atmosphere::math_utils::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Percentage deviation of `actual` from `expected`
///
/// # Examples
/// ```
/// use grey_atmosphere::math_utils::deviation;
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

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(100.0, 200.0, 0.25), 125.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(-6.0, 2.0, -2.0), 0.5);
        assert_eq!(inverse_lerp(-6.0, 2.0, -6.0), 0.0);
        assert_eq!(inverse_lerp(-6.0, 2.0, 2.0), 1.0);
        assert_eq!(inverse_lerp(1.0, 1.0, 5.0), 0.0);
    }

    #[test]
    fn test_linspace() {
        let grid = linspace(-3.5, 2.0, 12);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid[0], -3.5);
        assert!((grid[11] - 2.0).abs() < 1e-12);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(4.0, 9.0, 1), vec![4.0]);
    }

    #[test]
    fn test_deviation() {
        assert_eq!(deviation(100.0, 100.0), 0.0);
        assert!((deviation(5880.0, 5777.0) - 1.783).abs() < 0.01);
        assert_eq!(deviation(0.0, 0.0), 0.0);
        assert_eq!(deviation(10.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_assert_deviation_macro() {
        assert_deviation!(105.0, 100.0, 10.0);
        assert_deviation!(2.0 * 52.5, 100.0, 10.0);
        assert_deviation!(5800.0, 5777.0, 1.0, "effective temperature within {}%", 1);
    }

    #[test]
    #[should_panic(expected = "assertion failed: deviation")]
    fn test_assert_deviation_macro_fails() {
        assert_deviation!(120.0, 100.0, 10.0);
    }
}
