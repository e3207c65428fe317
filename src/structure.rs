//! Depth-indexed structures shared by every component.
//!
//! Index 0 is the top of the atmosphere, index N-1 the deepest point.
//! Strictly positive quantities are carried as a [`DepthProfile`], which holds
//! the linear values and their natural logs side by side. The only way to
//! build one is through a constructor that derives one representation from
//! the other, so the two can never drift apart.

use crate::error::{AtmosphereError, Result};
use approx::relative_eq;
use serde::Serialize;
use std::ops::Deref;

/// A strictly positive depth-indexed quantity in paired linear/log form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthProfile {
    values: Vec<f64>,
    logs: Vec<f64>,
}

impl DepthProfile {
    /// Build from linear values; every value must be positive and finite.
    pub fn from_values(quantity: &'static str, values: Vec<f64>) -> Result<Self> {
        let mut logs = Vec::with_capacity(values.len());
        for (i, &v) in values.iter().enumerate() {
            if !(v > 0.0 && v.is_finite()) {
                return Err(AtmosphereError::instability(quantity, i, v));
            }
            logs.push(v.ln());
        }
        Ok(Self { values, logs })
    }

    /// Build from natural logs; every log must be finite.
    pub fn from_logs(quantity: &'static str, logs: Vec<f64>) -> Result<Self> {
        let mut values = Vec::with_capacity(logs.len());
        for (i, &l) in logs.iter().enumerate() {
            let v = l.exp();
            if !(l.is_finite() && v > 0.0 && v.is_finite()) {
                return Err(AtmosphereError::instability(quantity, i, v));
            }
            values.push(v);
        }
        Ok(Self { values, logs })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn logs(&self) -> &[f64] {
        &self.logs
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn log(&self, index: usize) -> f64 {
        self.logs[index]
    }

    /// Base-10 logs, for presentation
    pub fn log10s(&self) -> Vec<f64> {
        self.logs.iter().map(|l| l / std::f64::consts::LN_10).collect()
    }

    /// True when `exp(log) == value` at every depth within floating-point tolerance
    pub fn is_consistent(&self) -> bool {
        self.values.len() == self.logs.len()
            && self
                .values
                .iter()
                .zip(&self.logs)
                .all(|(v, l)| relative_eq!(l.exp(), *v, max_relative = 1e-12))
    }
}

macro_rules! depth_profile_record {
    ($(#[$meta:meta])* $name:ident, $quantity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct $name(DepthProfile);

        impl $name {
            pub const QUANTITY: &'static str = $quantity;

            pub fn from_values(values: Vec<f64>) -> Result<Self> {
                DepthProfile::from_values($quantity, values).map(Self)
            }

            pub fn from_logs(logs: Vec<f64>) -> Result<Self> {
                DepthProfile::from_logs($quantity, logs).map(Self)
            }

            pub fn profile(&self) -> &DepthProfile {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = DepthProfile;

            fn deref(&self) -> &DepthProfile {
                &self.0
            }
        }
    };
}

depth_profile_record!(
    /// Rosseland optical depth, strictly increasing with index
    TauGrid,
    "optical depth"
);
depth_profile_record!(
    /// Kinetic temperature (K)
    TemperatureStructure,
    "temperature"
);
depth_profile_record!(
    /// Mass density (g/cm³)
    DensityStructure,
    "density"
);
depth_profile_record!(
    /// Bolometric Planck function σT⁴/π (erg/s/cm²/sr)
    PlanckStructure,
    "Planck function"
);
depth_profile_record!(
    /// Bolometric mean intensity J (erg/s/cm²/sr)
    MeanIntensityStructure,
    "mean intensity"
);

/// Rosseland mean opacity (cm²/g), linear only
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpacityStructure(Vec<f64>);

impl OpacityStructure {
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        for (i, &k) in values.iter().enumerate() {
            if !(k > 0.0 && k.is_finite()) {
                return Err(AtmosphereError::instability("opacity", i, k));
            }
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn value(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Gas and radiation pressure (dyn/cm²); total pressure is their sum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureStructure {
    pub gas: DepthProfile,
    pub radiation: DepthProfile,
}

impl PressureStructure {
    pub fn len(&self) -> usize {
        self.gas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gas.is_empty()
    }

    pub fn total(&self, index: usize) -> f64 {
        self.gas.value(index) + self.radiation.value(index)
    }

    pub fn totals(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.total(i)).collect()
    }
}

/// Geometric depth below the top of the atmosphere (cm), linear only since `depth[0] = 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthStructure(Vec<f64>);

impl DepthStructure {
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        for (i, &z) in values.iter().enumerate() {
            if !(z >= 0.0 && z.is_finite()) {
                return Err(AtmosphereError::instability("depth", i, z));
            }
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn value(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Depths converted to km
    pub fn km(&self) -> Vec<f64> {
        self.0.iter().map(|z| z * 1.0e-5).collect()
    }
}
