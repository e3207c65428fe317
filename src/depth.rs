//! Geometric depth from optical depth: `dz/d(ln tau) = tau / (kappa · rho)`
//!
//! Explicit forward steps from `z = 0` at the top. The step away from the
//! top layer takes its density from index 1; every later step uses opacity
//! and density at the target index.

use crate::error::{AtmosphereError, Result, ensure_same_len};
use crate::structure::{DensityStructure, DepthStructure, OpacityStructure, TauGrid};
use log::debug;

/// Depth below the top of the atmosphere (cm) at every point of `tau`
pub fn geometric_depth(
    tau: &TauGrid,
    kappa: &OpacityStructure,
    density: &DensityStructure,
) -> Result<DepthStructure> {
    let n = tau.len();
    if n < 2 {
        return Err(AtmosphereError::invalid("tau grid needs at least 2 points"));
    }
    ensure_same_len(n, &[("opacity", kappa.len()), ("density", density.len())])?;

    let dlog_tau = tau.log_step();
    let mut depth = Vec::with_capacity(n);
    depth.push(0.0);

    let first = tau.value(0) / (kappa.value(0) * density.value(1)) * dlog_tau;
    depth.push(first);

    for i in 2..n {
        let step = tau.value(i) / (kappa.value(i) * density.value(i)) * dlog_tau;
        depth.push(depth[i - 1] + step);
    }

    let depth = DepthStructure::from_values(depth)?;
    debug!("depth: bottom {:.3e} km", depth.value(n - 1) * 1.0e-5);
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_depth_steps() {
        let tau = TauGrid::build(3, -2.0, 0.0).unwrap();
        let kappa = OpacityStructure::from_values(vec![1.0, 2.0, 4.0]).unwrap();
        let rho = DensityStructure::from_values(vec![1.0e-9, 1.0e-8, 1.0e-7]).unwrap();
        let depth = geometric_depth(&tau, &kappa, &rho).unwrap();
        let step = tau.log_step();

        assert_eq!(depth.value(0), 0.0);
        // first step: tau and kappa at the top, density one layer down
        let z1 = 0.01 / (1.0 * 1.0e-8) * step;
        assert_relative_eq!(depth.value(1), z1, max_relative = 1e-10);
        let z2 = z1 + 1.0 / (4.0 * 1.0e-7) * step;
        assert_relative_eq!(depth.value(2), z2, max_relative = 1e-10);
    }

    #[test]
    fn test_depth_monotonic() {
        let tau = TauGrid::build(30, -6.0, 2.0).unwrap();
        let kappa = OpacityStructure::from_values(vec![0.5; 30]).unwrap();
        let rho = DensityStructure::from_values((0..30).map(|i| 1.0e-9 * (i + 1) as f64).collect())
            .unwrap();
        let depth = geometric_depth(&tau, &kappa, &rho).unwrap();
        for w in depth.values().windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert!(depth.value(1) > 0.0);
    }

    #[test]
    fn test_mismatched_lengths() {
        let tau = TauGrid::build(3, -2.0, 0.0).unwrap();
        let kappa = OpacityStructure::from_values(vec![1.0, 2.0]).unwrap();
        let rho = DensityStructure::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(geometric_depth(&tau, &kappa, &rho).is_err());
    }
}
