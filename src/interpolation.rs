//! One-dimensional interpolation against a monotone abscissa.

use crate::math_utils::{inverse_lerp, lerp};

/// Interpolates `ys` (tabulated against strictly increasing `xs`) at `x`.
pub trait Interpolator {
    fn interpolate(&self, xs: &[f64], ys: &[f64], x: f64) -> f64;
}

/// Piecewise-linear interpolation that clamps outside the table.
///
/// Queries below `xs[0]` return `ys[0]` and queries above the last abscissa
/// return the last ordinate; nothing is ever extrapolated. This includes
/// `x = -inf`, which the Lambda operator produces when it asks for `ln(0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, xs: &[f64], ys: &[f64], x: f64) -> f64 {
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
        // first abscissa strictly above x; guaranteed in 1..n by the clamps
        let upper = xs[..n].partition_point(|&v| v <= x);
        let lower = upper - 1;
        lerp(ys[lower], ys[upper], inverse_lerp(xs[lower], xs[upper], x))
    }
}
