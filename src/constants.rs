//! Physical constants and the fixed tuning values of the atmosphere solver.
//!
//! All values are CGS. Physical constants live in one immutable
//! [`PhysicalConstants`] value, built once on first use and shared by
//! reference with every component.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Fundamental and solar constants (CGS units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Speed of light (cm/s)
    pub c: f64,
    /// Stefan-Boltzmann constant (erg/s/cm²/K⁴)
    pub sigma: f64,
    /// Boltzmann constant (erg/K)
    pub k_b: f64,
    /// Planck constant (erg·s)
    pub h: f64,
    /// Elementary charge (esu)
    pub e_charge: f64,
    /// Electron mass (g)
    pub m_e: f64,
    /// Gravitational constant (cm³/g/s²)
    pub g_newton: f64,
    /// Atomic mass unit (g)
    pub amu: f64,
    /// Electron volt (erg)
    pub ev: f64,
    /// Solar radius (cm)
    pub r_sun: f64,
    /// Solar mass (g)
    pub m_sun: f64,
    /// Solar luminosity (erg/s)
    pub l_sun: f64,
    /// Mean molecular weight of the gas (amu)
    pub mean_molecular_weight: f64,
}

impl PhysicalConstants {
    pub fn cgs() -> Self {
        Self {
            c: 2.997_924_58e10,
            sigma: 5.670_374_419e-5,
            k_b: 1.380_649e-16,
            h: 6.626_070_15e-27,
            e_charge: 4.803_204_7e-10,
            m_e: 9.109_383_7e-28,
            g_newton: 6.674_30e-8,
            amu: 1.660_539_07e-24,
            ev: 1.602_176_634e-12,
            r_sun: 6.957e10,
            m_sun: 1.988_47e33,
            l_sun: 3.828e33,
            mean_molecular_weight: 1.0,
        }
    }

    /// Radiation-pressure coefficient `4σ/3c`, so that `P_rad = a·T⁴`
    pub fn radiation_pressure_coefficient(&self) -> f64 {
        4.0 * self.sigma / (3.0 * self.c)
    }

    pub fn log_sigma(&self) -> f64 {
        self.sigma.ln()
    }

    /// ln(μ·m_u) - ln(k_B), the constant offset of the ideal-gas density law
    pub fn log_density_offset(&self) -> f64 {
        (self.mean_molecular_weight * self.amu).ln() - self.k_b.ln()
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::cgs()
    }
}

/// Process-wide constants, constructed once and never mutated
pub static CONSTANTS: Lazy<PhysicalConstants> = Lazy::new(PhysicalConstants::cgs);

// Boundary conditions
pub const TOP_TOTAL_PRESSURE: f64 = 1.0e-4; // dyn/cm², total pressure at the top layer
pub const RADIATION_PRESSURE_CAP: f64 = 0.99; // max fraction of total pressure carried by radiation

// Grey temperature law
pub const HOPF_TOP: f64 = 0.55;
pub const HOPF_BOTTOM: f64 = 0.710;

// Synthetic solar reference opacity, log10(cm²/g)
pub const SOLAR_LOG10_KAPPA_TOP: f64 = -3.5;
pub const SOLAR_LOG10_KAPPA_BOTTOM: f64 = 2.0;

// Opacity mixture law
pub const HOT_REGIME_THRESHOLD_K: f64 = 6000.0;
pub const PROXY_DENSITY_DILUTION: f64 = 1.0e-7; // photospheric / mean stellar density
pub const BOUND_FREE_COEFF: f64 = 4.34e25;
pub const FREE_FREE_COEFF: f64 = 3.68e22;
pub const H_MINUS_COEFF: f64 = 2.5e-31;
pub const H_MINUS_REFERENCE_Z: f64 = 0.02;
pub const ELECTRON_SCATTERING_COEFF: f64 = 0.2;

// Exponential integral
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;
pub const E1_SERIES_CUTOFF: f64 = 3.0;
pub const E1_SERIES_TERMS: u32 = 11;
pub const E1_ARGUMENT_FLOOR: f64 = 1.0e-6;

// Lambda operator
pub const LAMBDA_NODE_COUNT: usize = 15;
pub const LAMBDA_MIN_OFFSET: f64 = 1.0e-6;
pub const LAMBDA_MAX_OFFSET: f64 = 30.0;
pub const LAMBDA_KERNEL_THRESHOLD: f64 = 1.0e-14;

// Temperature correction
pub const CORRECTION_DAMPING: f64 = 0.5;
