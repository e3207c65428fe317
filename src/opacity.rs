//! Rosseland mean opacity scaled from a synthetic solar reference atmosphere
//!
//! The solar reference opacity runs uniformly in log10 from -3.5 at the top
//! of the grid to 2.0 at the bottom. A star's opacity at each depth is that
//! reference multiplied by the ratio of two mixture-law opacity factors, one
//! evaluated for the star and one for the Sun at the same optical depth, and
//! by a caller-supplied scale factor. The Sun's factor uses the Sun's own
//! grey temperature at that depth, and both factors use the mixture selected
//! by the star's local temperature.
//!
//! The mixture law needs a density, but the true density is only known after
//! the pressure has been integrated with these opacities. A proxy density,
//! the star's mean density from `g` and `R` diluted to photospheric levels,
//! stands in for it.

use crate::config::AtmosphereConfig;
use crate::constants::{
    BOUND_FREE_COEFF, ELECTRON_SCATTERING_COEFF, FREE_FREE_COEFF, H_MINUS_COEFF,
    H_MINUS_REFERENCE_Z, HOT_REGIME_THRESHOLD_K, PROXY_DENSITY_DILUTION, PhysicalConstants,
    SOLAR_LOG10_KAPPA_BOTTOM, SOLAR_LOG10_KAPPA_TOP,
};
use crate::error::{AtmosphereError, Result, ensure_same_len};
use crate::math_utils::linspace;
use crate::structure::{OpacityStructure, TauGrid, TemperatureStructure};
use crate::temperature::grey_temperature;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const SUN_HYDROGEN_FRACTION: f64 = 0.70;
pub const SUN_METAL_FRACTION: f64 = 0.02;

/// Mass fractions of hydrogen (X) and metals (Z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub hydrogen: f64,
    pub metals: f64,
}

impl Composition {
    pub fn new(hydrogen: f64, metals: f64) -> Self {
        Self { hydrogen, metals }
    }

    pub fn solar() -> Self {
        Self::new(SUN_HYDROGEN_FRACTION, SUN_METAL_FRACTION)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |f: f64| (0.0..=1.0).contains(&f);
        if !in_range(self.hydrogen) || !in_range(self.metals) {
            return Err(AtmosphereError::invalid(format!(
                "mass fractions must lie in [0, 1]: X = {}, Z = {}",
                self.hydrogen, self.metals
            )));
        }
        if self.hydrogen + self.metals > 1.0 {
            return Err(AtmosphereError::invalid(format!(
                "X + Z exceeds 1: X = {}, Z = {}",
                self.hydrogen, self.metals
            )));
        }
        Ok(())
    }
}

/// True when `temperature` is in the hot-star opacity regime
pub fn is_hot(temperature: f64) -> bool {
    temperature >= HOT_REGIME_THRESHOLD_K
}

/// Which mixture of opacity sources applies at a given temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpacityRegime {
    /// Below 6000 K: `(1+X)` free-free, H⁻ bound-free and electron scattering.
    ///
    /// The bound-free term is left out of this branch while the hot branch
    /// keeps it. Whether that follows a deliberate textbook simplification or
    /// is a transcription slip needs a domain expert's call; it is kept as-is.
    Cool,
    /// 6000 K and above: bound-free, free-free and electron scattering,
    /// without the `(1+X)` factor (it cancels in the star/Sun ratio).
    Hot,
}

impl OpacityRegime {
    pub fn for_temperature(temperature: f64) -> Self {
        if is_hot(temperature) {
            OpacityRegime::Hot
        } else {
            OpacityRegime::Cool
        }
    }
}

/// ln of the proxy density (g/cm³) for surface gravity `gravity` (cm/s²) and radius in solar radii
pub fn log_proxy_density(gravity: f64, radius_solar: f64, constants: &PhysicalConstants) -> f64 {
    // mean density 3g / (4πGR), diluted to photospheric levels
    (3.0 * gravity).ln()
        - (4.0 * PI * constants.g_newton).ln()
        - (radius_solar * constants.r_sun).ln()
        + PROXY_DENSITY_DILUTION.ln()
}

/// Dimensionless mixture-law opacity factor at density `exp(log_rho)` and `temperature`
///
/// The source mixture is set by `regime` rather than by `temperature`, so the
/// star and the Sun at one depth can be evaluated with the same mixture.
pub fn opacity_factor(
    log_rho: f64,
    temperature: f64,
    composition: Composition,
    regime: OpacityRegime,
) -> f64 {
    let log_t = temperature.ln();
    let log_one_plus_x = (1.0 + composition.hydrogen).ln();

    // Kramers bound-free and free-free share the ρ T^-3.5 dependence
    let log_kramers = log_rho - 3.5 * log_t;
    let log_bound_free = BOUND_FREE_COEFF.ln() + composition.metals.ln() + log_kramers;
    let log_free_free = FREE_FREE_COEFF.ln() + (1.0 - composition.metals).ln() + log_kramers;
    let log_electron = ELECTRON_SCATTERING_COEFF.ln();

    match regime {
        OpacityRegime::Cool => {
            let log_h_minus = H_MINUS_COEFF.ln()
                + (composition.metals / H_MINUS_REFERENCE_Z).ln()
                + 0.5 * log_rho
                + 9.0 * log_t;
            (log_one_plus_x + log_free_free).exp()
                + log_h_minus.exp()
                + (log_one_plus_x + log_electron).exp()
        }
        OpacityRegime::Hot => log_bound_free.exp() + log_free_free.exp() + log_electron.exp(),
    }
}

/// Synthetic solar Rosseland opacity, uniform in log10 between fixed bounds
pub fn solar_reference_opacity(depth_count: usize) -> Result<OpacityStructure> {
    let values = linspace(SOLAR_LOG10_KAPPA_TOP, SOLAR_LOG10_KAPPA_BOTTOM, depth_count)
        .into_iter()
        .map(|log10_kappa| 10.0_f64.powf(log10_kappa))
        .collect();
    OpacityStructure::from_values(values)
}

/// Scales the solar reference opacity to a star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpacityModel {
    /// Stellar surface gravity (cm/s²)
    pub gravity: f64,
    /// Solar surface gravity (cm/s²)
    pub sun_gravity: f64,
    /// Stellar radius (solar radii)
    pub radius_solar: f64,
    /// Stellar effective temperature (K)
    pub teff: f64,
    /// Solar effective temperature (K)
    pub sun_teff: f64,
    /// Multiplier applied on top of the star/Sun ratio
    pub opacity_scale: f64,
    pub composition: Composition,
}

impl OpacityModel {
    pub fn from_config(config: &AtmosphereConfig) -> Self {
        Self {
            gravity: config.gravity(),
            sun_gravity: config.sun_gravity(),
            radius_solar: config.radius_solar,
            teff: config.teff,
            sun_teff: config.sun_teff,
            opacity_scale: config.opacity_scale,
            composition: config.composition(),
        }
    }

    fn validate(&self) -> Result<()> {
        let positive = [
            ("surface gravity", self.gravity),
            ("solar surface gravity", self.sun_gravity),
            ("stellar radius", self.radius_solar),
            ("effective temperature", self.teff),
            ("solar effective temperature", self.sun_teff),
            ("opacity scale", self.opacity_scale),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(AtmosphereError::invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        self.composition.validate()
    }

    /// Rosseland mean opacity (cm²/g) at every depth of `tau`
    pub fn rosseland_opacity(
        &self,
        tau: &TauGrid,
        temperature: &TemperatureStructure,
        constants: &PhysicalConstants,
    ) -> Result<OpacityStructure> {
        self.validate()?;
        ensure_same_len(tau.len(), &[("temperature", temperature.len())])?;

        let solar = solar_reference_opacity(tau.len())?;
        let log_rho_star = log_proxy_density(self.gravity, self.radius_solar, constants);
        let log_rho_sun = log_proxy_density(self.sun_gravity, 1.0, constants);
        // the reference atmosphere is the Sun's own grey profile, whatever T the star carries
        let sun_temperature = grey_temperature(self.sun_teff, tau)?;

        let mut kappa = Vec::with_capacity(tau.len());
        for i in 0..tau.len() {
            let t_star = temperature.value(i);
            let regime = OpacityRegime::for_temperature(t_star);
            let factor_star = opacity_factor(log_rho_star, t_star, self.composition, regime);
            let factor_sun = opacity_factor(
                log_rho_sun,
                sun_temperature.value(i),
                Composition::solar(),
                regime,
            );
            kappa.push(self.opacity_scale * solar.value(i) * factor_star / factor_sun);
        }

        let opacity = OpacityStructure::from_values(kappa)?;
        debug!(
            "opacity: kappa top {:.3e}, kappa bottom {:.3e} cm²/g",
            opacity.value(0),
            opacity.value(opacity.len() - 1)
        );
        Ok(opacity)
    }
}
