//! Tabular view of a model for JSON export and the console

use crate::error::{AtmosphereError, Result};
use crate::model::AtmosphereModel;
use crate::radiative_equilibrium::TemperatureCorrection;
use crate::stellar::StellarParameters;
use colored::Colorize;
use serde::Serialize;

/// One depth point of the model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerRow {
    pub index: usize,
    pub log10_tau: f64,
    pub temperature_k: f64,
    pub opacity: f64,
    pub gas_pressure: f64,
    pub radiation_pressure: f64,
    pub density: f64,
    pub depth_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_t: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelReport {
    pub stellar: StellarParameters,
    pub photosphere_index: usize,
    pub rows: Vec<LayerRow>,
}

impl ModelReport {
    pub fn from_model(model: &AtmosphereModel) -> Self {
        let log10_tau = model.tau.log10s();
        let depth_km = model.depth.km();
        let rows = (0..model.len())
            .map(|i| LayerRow {
                index: i,
                log10_tau: log10_tau[i],
                temperature_k: model.temperature.value(i),
                opacity: model.opacity.value(i),
                gas_pressure: model.pressure.gas.value(i),
                radiation_pressure: model.pressure.radiation.value(i),
                density: model.density.value(i),
                depth_km: depth_km[i],
                delta_t: None,
            })
            .collect();
        Self {
            stellar: model.stellar_parameters(),
            photosphere_index: model.photosphere_index(),
            rows,
        }
    }

    /// Attach the per-layer ΔT of a correction step
    pub fn with_correction(mut self, correction: &TemperatureCorrection) -> Result<Self> {
        if correction.delta_t.len() != self.rows.len() {
            return Err(AtmosphereError::invalid(format!(
                "correction has {} depth points, report has {}",
                correction.delta_t.len(),
                self.rows.len()
            )));
        }
        for (row, dt) in self.rows.iter_mut().zip(&correction.delta_t) {
            row.delta_t = Some(*dt);
        }
        Ok(self)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AtmosphereError::Serialization(format!("Failed to serialize report: {}", e))
        })
    }

    /// Console table; the photosphere row is highlighted
    pub fn render_table(&self) -> String {
        let s = &self.stellar;
        let summary = format!(
            "Teff {:.0} K  log g {:.2}  R {:.2} Rsun  M {:.3} Msun  L {:.3} Lsun",
            s.teff, s.log_g, s.radius_solar, s.mass_solar, s.luminosity_solar
        );

        let dt_column = if self.rows.iter().any(|r| r.delta_t.is_some()) {
            format!(" {:>9}", "dT (K)")
        } else {
            String::new()
        };
        let header = format!(
            "{:>3} {:>8} {:>9} {:>10} {:>10} {:>10} {:>10} {:>9}{}",
            "i", "log tau", "T (K)", "kappa", "P_gas", "P_rad", "rho", "z (km)", dt_column
        );

        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(summary.bold().to_string());
        lines.push(header.cyan().to_string());
        lines.push("-".repeat(header.len()));
        for row in &self.rows {
            let line = format_row(row);
            if row.index == self.photosphere_index {
                lines.push(line.yellow().bold().to_string());
            } else {
                lines.push(line);
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn print_table(&self) {
        print!("{}", self.render_table());
    }
}

fn format_row(row: &LayerRow) -> String {
    let dt = row
        .delta_t
        .map(|dt| format!(" {:>+9.2}", dt))
        .unwrap_or_default();
    format!(
        "{:>3} {:>8.3} {:>9.1} {:>10.3e} {:>10.3e} {:>10.3e} {:>10.3e} {:>9.1}{}",
        row.index,
        row.log10_tau,
        row.temperature_k,
        row.opacity,
        row.gas_pressure,
        row.radiation_pressure,
        row.density,
        row.depth_km,
        dt
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AtmosphereConfig;

    fn solar_report() -> (AtmosphereModel, ModelReport) {
        let model = AtmosphereModel::build(&AtmosphereConfig::default()).unwrap();
        let report = ModelReport::from_model(&model);
        (model, report)
    }

    #[test]
    fn test_rows_mirror_model() {
        let (model, report) = solar_report();
        assert_eq!(report.rows.len(), model.len());
        assert_eq!(report.photosphere_index, 37);
        let row = &report.rows[10];
        assert_eq!(row.index, 10);
        assert_eq!(row.temperature_k, model.temperature.value(10));
        assert_eq!(row.density, model.density.value(10));
        assert_eq!(report.rows[0].depth_km, 0.0);
        assert!(report.rows.iter().all(|r| r.delta_t.is_none()));
    }

    #[test]
    fn test_json_export() {
        let (_, report) = solar_report();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 50);
        assert_eq!(value["photosphere_index"], 37);
        assert!(value["rows"][0].get("delta_t").is_none());
    }

    #[test]
    fn test_correction_column() {
        let (model, report) = solar_report();
        let step = model.correct().unwrap();
        let report = report.with_correction(&step.correction).unwrap();
        assert_eq!(report.rows[49].delta_t, Some(0.0));
        assert!(report.render_table().contains("dT (K)"));

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["rows"][0]["delta_t"].as_f64().unwrap() < 0.0);
    }

    #[test]
    fn test_correction_length_mismatch() {
        let (_, report) = solar_report();
        let correction = TemperatureCorrection {
            temperature: crate::structure::TemperatureStructure::from_values(vec![5000.0; 3])
                .unwrap(),
            delta_t: vec![0.0; 3],
        };
        assert!(report.with_correction(&correction).is_err());
    }

    #[test]
    fn test_correction_column_on_every_row() {
        let (model, report) = solar_report();
        let step = model.correct().unwrap();
        let table = report.with_correction(&step.correction).unwrap().render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3 + 50);
        // the bottom row is not the highlighted one, so it carries no escape codes
        assert!(lines[52].starts_with(" 49 "));
        assert!(lines[52].ends_with("+0.00"));
        assert_eq!(lines[2].len(), lines[52].len());
    }

    #[test]
    fn test_table_has_every_layer() {
        let (_, report) = solar_report();
        let table = report.render_table();
        assert!(table.contains("log tau"));
        // summary, header, rule, one line per layer
        assert_eq!(table.lines().count(), 3 + 50);
    }
}
