//! Rosseland optical-depth grid

use crate::error::{AtmosphereError, Result};
use crate::math_utils::linspace;
use crate::structure::TauGrid;
use log::debug;
use std::f64::consts::LN_10;

impl TauGrid {
    /// Build `depth_count` points evenly spaced in ln(tau) from `10^log10_min` to `10^log10_max`.
    pub fn build(depth_count: usize, log10_min: f64, log10_max: f64) -> Result<Self> {
        if depth_count < 2 {
            return Err(AtmosphereError::invalid(format!(
                "depth count must be at least 2, got {}",
                depth_count
            )));
        }
        if !(log10_min < log10_max) {
            return Err(AtmosphereError::invalid(format!(
                "log10 tau bounds are inverted: min {} >= max {}",
                log10_min, log10_max
            )));
        }

        let logs = linspace(log10_min * LN_10, log10_max * LN_10, depth_count);
        let grid = TauGrid::from_logs(logs)?;
        debug!(
            "tau grid: {} points, tau {:.3e} .. {:.3e}",
            depth_count,
            grid.value(0),
            grid.bottom()
        );
        Ok(grid)
    }

    /// Uniform step in ln(tau)
    pub fn log_step(&self) -> f64 {
        self.log(1) - self.log(0)
    }

    /// Optical depth at the deepest point
    pub fn bottom(&self) -> f64 {
        self.value(self.len() - 1)
    }

    /// log10(tau) at the top and bottom of the grid
    pub fn log10_bounds(&self) -> (f64, f64) {
        (self.log(0) / LN_10, self.log(self.len() - 1) / LN_10)
    }

    /// Depth index whose optical depth is closest to `target` in ln(tau)
    pub fn nearest_index(&self, target: f64) -> usize {
        let log_target = target.ln();
        self.logs()
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - log_target)
                    .abs()
                    .total_cmp(&(*b - log_target).abs())
            })
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
