//! First exponential integral `E1(x) = -Ei(-x)`, the Lambda-operator kernel.

use crate::constants::{E1_ARGUMENT_FLOOR, E1_SERIES_CUTOFF, E1_SERIES_TERMS, EULER_GAMMA};

/// Approximate `E1(|x|)`.
///
/// The argument is taken in absolute value and floored at 1e-6 to stay off
/// the logarithmic singularity at zero. Up to `x = 3` the 11-term power series
/// `-γ - ln x - Σ (-x)^k / (k·k!)` is used; beyond that the series loses
/// accuracy and the leading asymptotic term `e^-x / x` takes over.
/// Non-finite input gives an unspecified result.
pub fn e1(x: f64) -> f64 {
    let x = x.abs().max(E1_ARGUMENT_FLOOR);
    if x > E1_SERIES_CUTOFF {
        return (-x).exp() / x;
    }

    let mut sum = 0.0;
    let mut power = 1.0; // (-x)^k
    let mut factorial = 1.0; // k!
    for k in 1..=E1_SERIES_TERMS {
        let k = k as f64;
        power *= -x;
        factorial *= k;
        sum += power / (k * factorial);
    }
    -EULER_GAMMA - x.ln() - sum
}
