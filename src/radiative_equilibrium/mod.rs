//! One radiative-equilibrium step: Planck function, Lambda operator and the
//! damped temperature correction built on them.

pub mod correction;
pub mod lambda;
pub mod planck;

pub use correction::{RadiativeStep, TemperatureCorrection, correct_temperature, temperature_correction};
pub use lambda::{Direction, LambdaQuadrature, mean_intensity, mean_intensity_with};
pub use planck::bolometric_planck;
