//! Error types for the atmosphere solver.

use thiserror::Error;

/// Errors surfaced by the structure solver and the radiative-equilibrium step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    /// Caller-supplied parameters or structures cannot produce a model.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A quantity that must be strictly positive and finite was not.
    #[error("Numerical instability: {quantity} = {value:e} at depth index {index}")]
    NumericalInstability {
        quantity: &'static str,
        index: usize,
        value: f64,
    },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration or report could not be written out as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AtmosphereError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    pub fn instability(quantity: &'static str, index: usize, value: f64) -> Self {
        Self::NumericalInstability {
            quantity,
            index,
            value,
        }
    }
}

pub type Result<T> = std::result::Result<T, AtmosphereError>;

/// Fail with `InvalidConfiguration` unless every structure has `expected` points.
pub fn ensure_same_len(expected: usize, lengths: &[(&str, usize)]) -> Result<()> {
    for (name, len) in lengths {
        if *len != expected {
            return Err(AtmosphereError::invalid(format!(
                "{} has {} depth points, expected {}",
                name, len, expected
            )));
        }
    }
    Ok(())
}
