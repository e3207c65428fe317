//! Bolometric Lambda operator
//!
//! Mean intensity `J(tau) = ½ ∫₀^∞ E1(|t - tau|) B(t) dt`, evaluated on a fixed
//! set of log-spaced offsets `d = |t - tau|`. Because the nodes are uniform in
//! `ln d`, the trapezoidal rule is applied in that variable:
//! `∫ E1(d) B d · d(ln d)`. Inward (deeper) and outward (shallower) halves are
//! summed separately; any interval whose far node leaves `[0, tau_bottom)` is
//! dropped rather than extrapolated.
//!
//! Layers close enough to the bottom that the kernel still sees the lower
//! boundary stay thermalized (`J = B`), and the surface is pinned to the
//! Eddington-Barbier value `J = ½B`.

use crate::constants::{
    LAMBDA_KERNEL_THRESHOLD, LAMBDA_MAX_OFFSET, LAMBDA_MIN_OFFSET, LAMBDA_NODE_COUNT,
};
use crate::error::{AtmosphereError, Result, ensure_same_len};
use crate::exp_integral::e1;
use crate::interpolation::Interpolator;
use crate::math_utils::linspace;
use crate::structure::{MeanIntensityStructure, PlanckStructure, TauGrid};
use log::debug;

/// Which side of the target depth a one-sided sum covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward larger optical depth
    Inward,
    /// Toward the surface
    Outward,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Inward => 1.0,
            Direction::Outward => -1.0,
        }
    }
}

/// Offset nodes with the E1 kernel evaluated once per node
#[derive(Debug, Clone)]
pub struct LambdaQuadrature {
    offsets: Vec<f64>,
    log_offsets: Vec<f64>,
    kernel: Vec<f64>,
}

impl Default for LambdaQuadrature {
    fn default() -> Self {
        Self::log_spaced(LAMBDA_NODE_COUNT, LAMBDA_MIN_OFFSET, LAMBDA_MAX_OFFSET)
    }
}

impl LambdaQuadrature {
    /// `count` nodes log-spaced from `min_offset` to `max_offset`
    pub fn log_spaced(count: usize, min_offset: f64, max_offset: f64) -> Self {
        let log_offsets = linspace(min_offset.ln(), max_offset.ln(), count);
        let offsets: Vec<f64> = log_offsets.iter().map(|l| l.exp()).collect();
        let kernel = offsets.iter().map(|&d| e1(d)).collect();
        Self {
            offsets,
            log_offsets,
            kernel,
        }
    }

    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn kernel(&self) -> &[f64] {
        &self.kernel
    }

    /// Trapezoidal `∫ E1(d) · d · source(tau ± d) d(ln d)` on one side of `tau`
    pub fn one_sided<F>(&self, tau: f64, bottom: f64, direction: Direction, source: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let sign = direction.sign();
        let mut sum = 0.0;
        for k in 1..self.offsets.len() {
            let far = tau + sign * self.offsets[k];
            if !(0.0..bottom).contains(&far) {
                continue;
            }
            let near = tau + sign * self.offsets[k - 1];
            let f_near = self.kernel[k - 1] * self.offsets[k - 1] * source(near);
            let f_far = self.kernel[k] * self.offsets[k] * source(far);
            sum += 0.5 * (f_near + f_far) * (self.log_offsets[k] - self.log_offsets[k - 1]);
        }
        sum
    }

    /// Trapezoidal estimate of `∫ E1(d) dd` over the node range
    pub fn kernel_norm(&self) -> f64 {
        self.one_sided(0.0, f64::INFINITY, Direction::Inward, |_| 1.0)
    }
}

/// True when the E1 kernel has decayed before reaching the bottom of the grid
fn resolvable(tau: f64, bottom: f64) -> bool {
    e1(bottom - tau) < LAMBDA_KERNEL_THRESHOLD
}

/// Bolometric mean intensity for Planck source `planck` on `tau`
pub fn mean_intensity<I: Interpolator>(
    tau: &TauGrid,
    planck: &PlanckStructure,
    interpolator: &I,
) -> Result<MeanIntensityStructure> {
    mean_intensity_with(tau, planck, interpolator, &LambdaQuadrature::default())
}

/// [`mean_intensity`] with an explicit offset quadrature
pub fn mean_intensity_with<I: Interpolator>(
    tau: &TauGrid,
    planck: &PlanckStructure,
    interpolator: &I,
    quadrature: &LambdaQuadrature,
) -> Result<MeanIntensityStructure> {
    let n = tau.len();
    if n < 2 {
        return Err(AtmosphereError::invalid("tau grid needs at least 2 points"));
    }
    ensure_same_len(n, &[("Planck function", planck.len())])?;

    let bottom = tau.bottom();
    // log-log interpolation of B against tau; ln(0) = -inf clamps to the top value
    let source = |t: f64| {
        interpolator
            .interpolate(tau.logs(), planck.logs(), t.ln())
            .exp()
    };

    let mut intensity = planck.values().to_vec();
    let mut integrated = 0usize;
    for (i, j) in intensity.iter_mut().enumerate().skip(1) {
        let t = tau.value(i);
        if !resolvable(t, bottom) {
            continue;
        }
        let inward = quadrature.one_sided(t, bottom, Direction::Inward, &source);
        let outward = quadrature.one_sided(t, bottom, Direction::Outward, &source);
        *j = 0.5 * inward + 0.5 * outward;
        integrated += 1;
    }
    intensity[0] = 0.5 * planck.value(0);

    debug!(
        "mean intensity: {} of {} layers integrated, J/B at top {:.3}",
        integrated,
        n,
        intensity[0] / planck.value(0)
    );
    MeanIntensityStructure::from_values(intensity)
}
