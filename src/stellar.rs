//! Bulk stellar parameters implied by a model configuration

use crate::config::AtmosphereConfig;
use crate::constants::PhysicalConstants;
use crate::structure::TauGrid;
use serde::Serialize;
use std::f64::consts::PI;

/// Mass and luminosity implied by `g`, `R` and `Teff`, in solar units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StellarParameters {
    pub teff: f64,
    pub log_g: f64,
    pub radius_solar: f64,
    pub mass_solar: f64,
    pub luminosity_solar: f64,
}

impl StellarParameters {
    pub fn from_config(config: &AtmosphereConfig, constants: &PhysicalConstants) -> Self {
        let radius = config.radius_solar * constants.r_sun;
        // g = GM/R²
        let mass = config.gravity() * radius * radius / constants.g_newton;
        // L = 4πR²σTeff⁴
        let luminosity = 4.0 * PI * radius * radius * constants.sigma * config.teff.powi(4);
        Self {
            teff: config.teff,
            log_g: config.log_g,
            radius_solar: config.radius_solar,
            mass_solar: mass / constants.m_sun,
            luminosity_solar: luminosity / constants.l_sun,
        }
    }
}

/// Depth index of the photosphere, the point nearest tau = 1
pub fn photosphere_index(tau: &TauGrid) -> usize {
    tau.nearest_index(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONSTANTS;
    use approx::assert_relative_eq;

    #[test]
    fn test_sun_is_one_solar_unit() {
        let sun = StellarParameters::from_config(&AtmosphereConfig::default(), &CONSTANTS);
        assert_relative_eq!(sun.mass_solar, 1.0, max_relative = 1e-2);
        assert_relative_eq!(sun.luminosity_solar, 1.0, max_relative = 1e-2);
        assert_eq!(sun.radius_solar, 1.0);
    }

    #[test]
    fn test_scaling_with_radius_and_temperature() {
        let sun = StellarParameters::from_config(&AtmosphereConfig::default(), &CONSTANTS);
        let giant = StellarParameters::from_config(
            &AtmosphereConfig {
                radius_solar: 10.0,
                teff: 5777.0 / 2.0,
                ..Default::default()
            },
            &CONSTANTS,
        );
        // same g: M ∝ R²; L ∝ R²·Teff⁴
        assert_relative_eq!(giant.mass_solar / sun.mass_solar, 100.0, max_relative = 1e-12);
        assert_relative_eq!(
            giant.luminosity_solar / sun.luminosity_solar,
            100.0 / 16.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_photosphere_index() {
        let tau = TauGrid::build(50, -6.0, 2.0).unwrap();
        let i = photosphere_index(&tau);
        assert_eq!(i, 37);
        assert!(tau.value(i) > 0.7 && tau.value(i) < 1.5);
    }
}
