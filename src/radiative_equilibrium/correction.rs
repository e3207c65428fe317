//! Damped temperature correction toward radiative equilibrium
//!
//! Linearizing `B(T)` gives `dB/dT = (4/π)·σT³`, so a mismatch `J - B` maps to
//! `ΔT = (J - B)·π / (4σT³)`. The difference is formed as
//! `J·(1 - exp(ln B - ln J))` to keep two nearly equal large numbers from
//! cancelling, and the step is halved before it is applied.

use super::lambda::mean_intensity;
use super::planck::bolometric_planck;
use crate::constants::{CORRECTION_DAMPING, PhysicalConstants};
use crate::error::{AtmosphereError, Result, ensure_same_len};
use crate::interpolation::Interpolator;
use crate::structure::{MeanIntensityStructure, PlanckStructure, TauGrid, TemperatureStructure};
use log::debug;
use serde::Serialize;
use std::f64::consts::PI;

/// Corrected temperature and the per-depth change that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureCorrection {
    pub temperature: TemperatureStructure,
    pub delta_t: Vec<f64>,
}

impl TemperatureCorrection {
    /// `|ΔT| / T` against the temperature the correction was applied to
    pub fn relative_changes(&self, previous: &TemperatureStructure) -> Vec<f64> {
        self.delta_t
            .iter()
            .zip(previous.values())
            .map(|(dt, t)| (dt / t).abs())
            .collect()
    }

    pub fn max_abs_delta(&self) -> f64 {
        max_abs(&self.delta_t)
    }
}

/// Everything one radiative-equilibrium step computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiativeStep {
    pub planck: PlanckStructure,
    pub intensity: MeanIntensityStructure,
    pub correction: TemperatureCorrection,
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// `(sign, ln|J - B|)`, or `None` when J and B agree exactly
fn signed_log_difference(log_j: f64, log_b: f64) -> Option<(f64, f64)> {
    if log_j == log_b {
        return None;
    }
    // J - B = J·(1 - B/J)
    let ratio_term = 1.0 - (log_b - log_j).exp();
    let sign = ratio_term.signum();
    Some((sign, log_j + ratio_term.abs().ln()))
}

/// One damped correction; the deepest layer is held fixed
pub fn temperature_correction(
    temperature: &TemperatureStructure,
    planck: &PlanckStructure,
    intensity: &MeanIntensityStructure,
    constants: &PhysicalConstants,
) -> Result<TemperatureCorrection> {
    let n = temperature.len();
    if n < 2 {
        return Err(AtmosphereError::invalid(
            "temperature structure needs at least 2 points",
        ));
    }
    ensure_same_len(
        n,
        &[
            ("Planck function", planck.len()),
            ("mean intensity", intensity.len()),
        ],
    )?;

    let log_scale = PI.ln() - 4.0_f64.ln() - constants.log_sigma();
    let mut delta_t = vec![0.0; n];
    for (i, dt) in delta_t.iter_mut().enumerate().take(n - 1) {
        if let Some((sign, log_diff)) = signed_log_difference(intensity.log(i), planck.log(i)) {
            *dt = sign * (log_diff + log_scale - 3.0 * temperature.log(i)).exp() * CORRECTION_DAMPING;
        }
    }

    let corrected = temperature
        .values()
        .iter()
        .zip(&delta_t)
        .map(|(t, dt)| t + dt)
        .collect();
    let corrected = TemperatureStructure::from_values(corrected)?;

    debug!(
        "temperature correction: dT top {:+.2} K, max |dT| {:.2} K",
        delta_t[0],
        max_abs(&delta_t)
    );
    Ok(TemperatureCorrection {
        temperature: corrected,
        delta_t,
    })
}

/// Planck function, mean intensity and correction for `temperature` on `tau`
pub fn correct_temperature<I: Interpolator>(
    tau: &TauGrid,
    temperature: &TemperatureStructure,
    interpolator: &I,
    constants: &PhysicalConstants,
) -> Result<RadiativeStep> {
    ensure_same_len(tau.len(), &[("temperature", temperature.len())])?;
    let planck = bolometric_planck(temperature, constants)?;
    let intensity = mean_intensity(tau, &planck, interpolator)?;
    let correction = temperature_correction(temperature, &planck, &intensity, constants)?;
    Ok(RadiativeStep {
        planck,
        intensity,
        correction,
    })
}
