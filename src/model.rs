//! One structural pass through the solver chain
//!
//! `AtmosphereModel` owns the outputs of
//! grid → temperature → opacity → pressure → density → depth
//! for a single configuration. It never iterates on its own: a caller that
//! wants radiative equilibrium runs [`AtmosphereModel::correct`], feeds the
//! corrected temperature back through [`AtmosphereModel::with_temperature`]
//! and decides when to stop.

use crate::config::AtmosphereConfig;
use crate::constants::{CONSTANTS, PhysicalConstants};
use crate::depth::geometric_depth;
use crate::equation_of_state::mass_density;
use crate::error::{Result, ensure_same_len};
use crate::hydrostatic::integrate_pressure;
use crate::interpolation::LinearInterpolator;
use crate::opacity::OpacityModel;
use crate::radiative_equilibrium::{RadiativeStep, correct_temperature};
use crate::stellar::{StellarParameters, photosphere_index};
use crate::structure::{
    DensityStructure, DepthStructure, OpacityStructure, PressureStructure, TauGrid,
    TemperatureStructure,
};
use crate::temperature::grey_temperature;
use log::info;

#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphereModel {
    pub config: AtmosphereConfig,
    pub constants: PhysicalConstants,
    pub tau: TauGrid,
    pub temperature: TemperatureStructure,
    pub opacity: OpacityStructure,
    pub pressure: PressureStructure,
    pub density: DensityStructure,
    pub depth: DepthStructure,
}

impl AtmosphereModel {
    /// Grey model for `config` with the shared CGS constants
    pub fn build(config: &AtmosphereConfig) -> Result<Self> {
        Self::build_with_constants(config, &CONSTANTS)
    }

    pub fn build_with_constants(
        config: &AtmosphereConfig,
        constants: &PhysicalConstants,
    ) -> Result<Self> {
        config.validate()?;
        let tau = TauGrid::build(config.depth_count, config.log10_tau_min, config.log10_tau_max)?;
        let temperature = grey_temperature(config.teff, &tau)?;
        Self::assemble(config.clone(), *constants, tau, temperature)
    }

    /// Rerun the structural pass on the same grid with a caller-supplied temperature
    pub fn with_temperature(&self, temperature: TemperatureStructure) -> Result<Self> {
        ensure_same_len(self.tau.len(), &[("temperature", temperature.len())])?;
        Self::assemble(
            self.config.clone(),
            self.constants,
            self.tau.clone(),
            temperature,
        )
    }

    /// One damped radiative-equilibrium correction of this model's temperature
    pub fn correct(&self) -> Result<RadiativeStep> {
        let step = correct_temperature(
            &self.tau,
            &self.temperature,
            &LinearInterpolator,
            &self.constants,
        )?;
        info!(
            "radiative correction: max |dT| {:.2} K",
            step.correction.max_abs_delta()
        );
        Ok(step)
    }

    pub fn len(&self) -> usize {
        self.tau.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tau.is_empty()
    }

    pub fn photosphere_index(&self) -> usize {
        photosphere_index(&self.tau)
    }

    pub fn stellar_parameters(&self) -> StellarParameters {
        StellarParameters::from_config(&self.config, &self.constants)
    }

    fn assemble(
        config: AtmosphereConfig,
        constants: PhysicalConstants,
        tau: TauGrid,
        temperature: TemperatureStructure,
    ) -> Result<Self> {
        let opacity = OpacityModel::from_config(&config).rosseland_opacity(
            &tau,
            &temperature,
            &constants,
        )?;
        let pressure =
            integrate_pressure(config.gravity(), &tau, &opacity, &temperature, &constants)?;
        let density = mass_density(&temperature, &pressure, &constants)?;
        let depth = geometric_depth(&tau, &opacity, &density)?;

        let photosphere = photosphere_index(&tau);
        info!(
            "structure built: {} layers, Teff {:.0} K, log g {:.2}; at tau {:.2}: T {:.0} K, rho {:.3e} g/cm³",
            tau.len(),
            config.teff,
            config.log_g,
            tau.value(photosphere),
            temperature.value(photosphere),
            density.value(photosphere)
        );

        Ok(Self {
            config,
            constants,
            tau,
            temperature,
            opacity,
            pressure,
            density,
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtmosphereError;
    use more_asserts::{assert_gt, assert_lt};

    #[test]
    fn test_build_solar() {
        let model = AtmosphereModel::build(&AtmosphereConfig::default()).unwrap();
        assert_eq!(model.len(), 50);
        assert_eq!(model.opacity.len(), 50);
        assert_eq!(model.pressure.len(), 50);
        assert_eq!(model.density.len(), 50);
        assert_eq!(model.depth.len(), 50);
        assert_eq!(model.depth.value(0), 0.0);
        assert_eq!(model.photosphere_index(), 37);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AtmosphereConfig {
            teff: -10.0,
            ..Default::default()
        };
        assert!(matches!(
            AtmosphereModel::build(&config),
            Err(AtmosphereError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_with_temperature_reruns_structure() {
        let model = AtmosphereModel::build(&AtmosphereConfig::default()).unwrap();
        let step = model.correct().unwrap();
        let next = model
            .with_temperature(step.correction.temperature.clone())
            .unwrap();
        assert_eq!(next.tau, model.tau);
        assert_eq!(next.temperature, step.correction.temperature);
        assert_ne!(next.pressure, model.pressure);
        assert_ne!(next.opacity, model.opacity);
        // the original model is untouched
        assert_eq!(
            model.temperature,
            AtmosphereModel::build(&AtmosphereConfig::default())
                .unwrap()
                .temperature
        );
    }

    #[test]
    fn test_hotter_temperature_changes_opacity() {
        let model = AtmosphereModel::build(&AtmosphereConfig::default()).unwrap();
        let hotter = TemperatureStructure::from_values(
            model.temperature.values().iter().map(|t| 1.5 * t).collect(),
        )
        .unwrap();
        let next = model.with_temperature(hotter).unwrap();
        for i in 0..model.len() {
            // Kramers terms fall as T^-3.5
            assert_lt!(next.opacity.value(i), 0.5 * model.opacity.value(i));
        }
    }

    #[test]
    fn test_with_temperature_length_mismatch() {
        let model = AtmosphereModel::build(&AtmosphereConfig::default()).unwrap();
        let short = TemperatureStructure::from_values(vec![5000.0; 10]).unwrap();
        assert!(model.with_temperature(short).is_err());
    }

    #[test]
    fn test_hotter_star_has_hotter_photosphere() {
        let sun = AtmosphereModel::build(&AtmosphereConfig::default()).unwrap();
        let hot = AtmosphereModel::build(&AtmosphereConfig {
            teff: 9000.0,
            log_g: 4.0,
            ..Default::default()
        })
        .unwrap();
        let i = sun.photosphere_index();
        assert_gt!(hot.temperature.value(i), sun.temperature.value(i));
    }
}
