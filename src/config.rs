//! Caller-supplied model parameters, loadable from JSON presets.

use crate::error::{AtmosphereError, Result};
use crate::opacity::{Composition, SUN_HYDROGEN_FRACTION, SUN_METAL_FRACTION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SUN_TEFF: f64 = 5777.0;
pub const SUN_LOG_G: f64 = 4.44;

/// Every scalar a model run needs; missing JSON fields fall back to the Sun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// Number of depth points
    pub depth_count: usize,
    pub log10_tau_min: f64,
    pub log10_tau_max: f64,
    /// Effective temperature (K)
    pub teff: f64,
    /// log10 of surface gravity in cm/s²
    pub log_g: f64,
    pub sun_teff: f64,
    pub sun_log_g: f64,
    /// Stellar radius in solar radii
    pub radius_solar: f64,
    /// Extra multiplier on the scaled opacity
    pub opacity_scale: f64,
    /// Hydrogen mass fraction X
    pub hydrogen_fraction: f64,
    /// Metal mass fraction Z
    pub metal_fraction: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            depth_count: 50,
            log10_tau_min: -6.0,
            log10_tau_max: 2.0,
            teff: SUN_TEFF,
            log_g: SUN_LOG_G,
            sun_teff: SUN_TEFF,
            sun_log_g: SUN_LOG_G,
            radius_solar: 1.0,
            opacity_scale: 1.0,
            hydrogen_fraction: SUN_HYDROGEN_FRACTION,
            metal_fraction: SUN_METAL_FRACTION,
        }
    }
}

impl AtmosphereConfig {
    pub fn validate(&self) -> Result<()> {
        if self.depth_count < 2 {
            return Err(AtmosphereError::invalid(format!(
                "depth count must be at least 2, got {}",
                self.depth_count
            )));
        }
        if !(self.log10_tau_min.is_finite() && self.log10_tau_max.is_finite())
            || self.log10_tau_min >= self.log10_tau_max
        {
            return Err(AtmosphereError::invalid(format!(
                "log10 tau bounds must satisfy min < max, got [{}, {}]",
                self.log10_tau_min, self.log10_tau_max
            )));
        }
        let positive = [
            ("effective temperature", self.teff),
            ("solar effective temperature", self.sun_teff),
            ("stellar radius", self.radius_solar),
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
        for (name, value) in [("log g", self.log_g), ("solar log g", self.sun_log_g)] {
            if !value.is_finite() {
                return Err(AtmosphereError::invalid(format!("{} must be finite", name)));
            }
        }
        self.composition().validate()
    }

    /// Parse and validate a JSON preset
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AtmosphereError::Config(format!("Failed to parse JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AtmosphereError::Config(format!("Failed to read file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AtmosphereError::Serialization(format!("Failed to serialize config: {}", e))
        })
    }

    /// Surface gravity (cm/s²)
    pub fn gravity(&self) -> f64 {
        10.0_f64.powf(self.log_g)
    }

    pub fn sun_gravity(&self) -> f64 {
        10.0_f64.powf(self.sun_log_g)
    }

    pub fn composition(&self) -> Composition {
        Composition::new(self.hydrogen_fraction, self.metal_fraction)
    }
}
