//! Grey temperature structure with an interpolated Hopf function
//!
//! `T = Teff · (0.75 · (tau + q(tau)))^¼`, where the Hopf function `q` runs
//! linearly from 0.55 at the top of the grid to 0.710 at the bottom as a
//! function of the fractional position in log tau. This is a closed-form
//! starting profile; radiative equilibrium is only approached by repeated
//! application of the temperature correction.

use crate::constants::{HOPF_BOTTOM, HOPF_TOP};
use crate::error::{AtmosphereError, Result};
use crate::math_utils::{inverse_lerp, lerp};
use crate::structure::{TauGrid, TemperatureStructure};
use log::debug;

/// Approximate Hopf function at depth `index` of `tau`
pub fn hopf_function(tau: &TauGrid, index: usize) -> f64 {
    let top = tau.log(0);
    let bottom = tau.log(tau.len() - 1);
    lerp(HOPF_TOP, HOPF_BOTTOM, inverse_lerp(top, bottom, tau.log(index)))
}

/// Initial grey temperature structure for effective temperature `teff` (K)
pub fn grey_temperature(teff: f64, tau: &TauGrid) -> Result<TemperatureStructure> {
    if !(teff > 0.0 && teff.is_finite()) {
        return Err(AtmosphereError::invalid(format!(
            "effective temperature must be positive, got {}",
            teff
        )));
    }
    if tau.len() < 2 {
        return Err(AtmosphereError::invalid("tau grid needs at least 2 points"));
    }

    let log_teff = teff.ln();
    let logs = (0..tau.len())
        .map(|i| {
            let hopf = hopf_function(tau, i);
            log_teff + 0.25 * (0.75 * (tau.value(i) + hopf)).ln()
        })
        .collect();

    let temperature = TemperatureStructure::from_logs(logs)?;
    debug!(
        "grey temperature: Teff {:.0} K, T top {:.1} K, T bottom {:.1} K",
        teff,
        temperature.value(0),
        temperature.value(temperature.len() - 1)
    );
    Ok(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_deviation;
    use approx::assert_relative_eq;

    #[test]
    fn test_hopf_endpoints() {
        let tau = TauGrid::build(50, -6.0, 2.0).unwrap();
        assert_relative_eq!(hopf_function(&tau, 0), HOPF_TOP, epsilon = 1e-12);
        assert_relative_eq!(hopf_function(&tau, 49), HOPF_BOTTOM, epsilon = 1e-12);
    }

    #[test]
    fn test_surface_temperature_matches_grey_law() {
        let tau = TauGrid::build(50, -6.0, 2.0).unwrap();
        let temp = grey_temperature(5777.0, &tau).unwrap();
        let expected_top = 5777.0 * (0.75 * (1.0e-6 + 0.55_f64)).powf(0.25);
        assert_relative_eq!(temp.value(0), expected_top, max_relative = 1e-10);
        // roughly 0.80 Teff at the surface of a grey atmosphere
        assert_deviation!(temp.value(0), 0.80 * 5777.0, 1.0);
    }

    #[test]
    fn test_temperature_non_decreasing_with_depth() {
        let tau = TauGrid::build(50, -6.0, 2.0).unwrap();
        let temp = grey_temperature(9500.0, &tau).unwrap();
        for w in temp.values().windows(2) {
            assert!(w[1] >= w[0], "temperature must not decrease with depth");
        }
        assert!(temp.is_consistent());
    }

    #[test]
    fn test_temperature_scales_with_teff() {
        let tau = TauGrid::build(20, -4.0, 1.0).unwrap();
        let cool = grey_temperature(4000.0, &tau).unwrap();
        let hot = grey_temperature(8000.0, &tau).unwrap();
        for i in 0..tau.len() {
            assert_relative_eq!(hot.value(i) / cool.value(i), 2.0, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_non_positive_teff_rejected() {
        let tau = TauGrid::build(10, -6.0, 2.0).unwrap();
        assert!(matches!(
            grey_temperature(0.0, &tau),
            Err(AtmosphereError::InvalidConfiguration(_))
        ));
        assert!(grey_temperature(-100.0, &tau).is_err());
    }
}
