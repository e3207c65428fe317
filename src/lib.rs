pub mod config;
pub mod constants;
pub mod depth;
pub mod equation_of_state;
pub mod error;
pub mod exp_integral;
pub mod hydrostatic;
pub mod interpolation;
pub mod math_utils;
pub mod model;
pub mod opacity;
pub mod optical_depth;
pub mod radiative_equilibrium;
pub mod report;
pub mod stellar;
pub mod structure;
pub mod temperature;

pub use config::AtmosphereConfig;
pub use constants::{CONSTANTS, PhysicalConstants};
pub use error::{AtmosphereError, Result};
pub use interpolation::{Interpolator, LinearInterpolator};
pub use model::AtmosphereModel;
pub use report::ModelReport;
pub use structure::{
    DensityStructure, DepthProfile, DepthStructure, MeanIntensityStructure, OpacityStructure,
    PlanckStructure, PressureStructure, TauGrid, TemperatureStructure,
};
