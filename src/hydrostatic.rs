//! Hydrostatic equilibrium in optical depth
//!
//! Integrates `dP/d(ln tau) = tau · g / kappa` for the total pressure by
//! explicit Euler steps in ln(tau), starting from a fixed total pressure at
//! the top of the atmosphere. At every depth the radiation pressure
//! `(4σ/3c)·T⁴` is split off and capped at 99% of the total so that the gas
//! pressure remainder stays positive.

use crate::constants::{PhysicalConstants, RADIATION_PRESSURE_CAP, TOP_TOTAL_PRESSURE};
use crate::error::{AtmosphereError, Result, ensure_same_len};
use crate::structure::{
    DepthProfile, OpacityStructure, PressureStructure, TauGrid, TemperatureStructure,
};
use log::{debug, warn};

/// Split a total pressure into (gas, radiation) for local temperature `temperature`
pub fn split_pressure(total: f64, temperature: f64, constants: &PhysicalConstants) -> (f64, f64) {
    let radiation = (constants.radiation_pressure_coefficient() * temperature.powi(4))
        .min(RADIATION_PRESSURE_CAP * total);
    (total - radiation, radiation)
}

/// Gas and radiation pressure (dyn/cm²) for surface gravity `gravity` (cm/s²)
pub fn integrate_pressure(
    gravity: f64,
    tau: &TauGrid,
    kappa: &OpacityStructure,
    temperature: &TemperatureStructure,
    constants: &PhysicalConstants,
) -> Result<PressureStructure> {
    let n = tau.len();
    if n < 2 {
        return Err(AtmosphereError::invalid("tau grid needs at least 2 points"));
    }
    if !(gravity > 0.0 && gravity.is_finite()) {
        return Err(AtmosphereError::invalid(format!(
            "surface gravity must be positive, got {}",
            gravity
        )));
    }
    ensure_same_len(n, &[("opacity", kappa.len()), ("temperature", temperature.len())])?;

    let dlog_tau = tau.log_step();
    let mut total = TOP_TOTAL_PRESSURE;
    let mut gas = Vec::with_capacity(n);
    let mut radiation = Vec::with_capacity(n);
    let mut capped = 0usize;

    for i in 0..n {
        if i > 0 {
            total += tau.value(i - 1) * gravity / kappa.value(i - 1) * dlog_tau;
        }
        let (p_gas, p_rad) = split_pressure(total, temperature.value(i), constants);
        if p_rad >= RADIATION_PRESSURE_CAP * total {
            capped += 1;
        }
        if !(p_gas > 0.0 && p_gas.is_finite()) {
            return Err(AtmosphereError::instability("gas pressure", i, p_gas));
        }
        gas.push(p_gas);
        radiation.push(p_rad);
    }

    if capped > 0 {
        warn!(
            "radiation pressure capped at {:.0}% of total in {} of {} layers",
            RADIATION_PRESSURE_CAP * 100.0,
            capped,
            n
        );
    }

    let pressure = PressureStructure {
        gas: DepthProfile::from_values("gas pressure", gas)?,
        radiation: DepthProfile::from_values("radiation pressure", radiation)?,
    };
    debug!(
        "pressure: P_gas bottom {:.3e}, P_rad bottom {:.3e} dyn/cm²",
        pressure.gas.value(n - 1),
        pressure.radiation.value(n - 1)
    );
    Ok(pressure)
}
