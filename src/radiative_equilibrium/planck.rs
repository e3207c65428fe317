//! Bolometric Planck function `B = σT⁴/π`

use crate::constants::PhysicalConstants;
use crate::error::Result;
use crate::structure::{PlanckStructure, TemperatureStructure};
use std::f64::consts::PI;

/// `ln B = ln σ + 4 ln T - ln π` at every depth
pub fn bolometric_planck(
    temperature: &TemperatureStructure,
    constants: &PhysicalConstants,
) -> Result<PlanckStructure> {
    let log_sigma = constants.log_sigma();
    let log_pi = PI.ln();
    let logs = temperature
        .logs()
        .iter()
        .map(|log_t| log_sigma + 4.0 * log_t - log_pi)
        .collect();
    PlanckStructure::from_logs(logs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONSTANTS;
    use approx::assert_relative_eq;

    #[test]
    fn test_planck_matches_stefan_boltzmann() {
        let temp = TemperatureStructure::from_values(vec![4000.0, 5777.0, 10000.0]).unwrap();
        let planck = bolometric_planck(&temp, &CONSTANTS).unwrap();
        for i in 0..3 {
            let t = temp.value(i);
            assert_relative_eq!(
                planck.value(i),
                CONSTANTS.sigma * t.powi(4) / PI,
                max_relative = 1e-12
            );
        }
        assert!(planck.is_consistent());
    }

    #[test]
    fn test_solar_surface_flux() {
        // π B(Teff) is the emergent flux σTeff⁴ ≈ 6.3e10 erg/s/cm² for the Sun
        let temp = TemperatureStructure::from_values(vec![5777.0]).unwrap();
        let planck = bolometric_planck(&temp, &CONSTANTS).unwrap();
        assert_relative_eq!(PI * planck.value(0), 6.32e10, max_relative = 0.01);
    }
}
