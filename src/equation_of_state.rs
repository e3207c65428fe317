//! Ideal-gas equation of state: `ρ = P_gas · μ · m_u / (k_B · T)`, evaluated in log space.

use crate::constants::PhysicalConstants;
use crate::error::{Result, ensure_same_len};
use crate::structure::{DensityStructure, PressureStructure, TemperatureStructure};
use log::debug;

/// Mass density (g/cm³) from gas pressure and temperature
pub fn mass_density(
    temperature: &TemperatureStructure,
    pressure: &PressureStructure,
    constants: &PhysicalConstants,
) -> Result<DensityStructure> {
    ensure_same_len(temperature.len(), &[("gas pressure", pressure.len())])?;

    let offset = constants.log_density_offset();
    let logs = (0..temperature.len())
        .map(|i| pressure.gas.log(i) - temperature.log(i) + offset)
        .collect();

    let density = DensityStructure::from_logs(logs)?;
    debug!(
        "density: rho top {:.3e}, rho bottom {:.3e} g/cm³",
        density.value(0),
        density.value(density.len() - 1)
    );
    Ok(density)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONSTANTS;
    use crate::error::AtmosphereError;
    use crate::structure::DepthProfile;
    use approx::assert_relative_eq;

    fn pressure(gas: Vec<f64>) -> PressureStructure {
        let radiation = vec![1.0e-3; gas.len()];
        PressureStructure {
            gas: DepthProfile::from_values("gas pressure", gas).unwrap(),
            radiation: DepthProfile::from_values("radiation pressure", radiation).unwrap(),
        }
    }

    #[test]
    fn test_ideal_gas_density() {
        let temp = TemperatureStructure::from_values(vec![5000.0, 6000.0]).unwrap();
        let rho = mass_density(&temp, &pressure(vec![1.0e4, 1.0e5]), &CONSTANTS).unwrap();
        let expected = 1.0e4 * CONSTANTS.amu / (CONSTANTS.k_b * 5000.0);
        assert_relative_eq!(rho.value(0), expected, max_relative = 1e-10);
        let expected = 1.0e5 * CONSTANTS.amu / (CONSTANTS.k_b * 6000.0);
        assert_relative_eq!(rho.value(1), expected, max_relative = 1e-10);
        assert!(rho.is_consistent());
    }

    #[test]
    fn test_mismatched_lengths() {
        let temp = TemperatureStructure::from_values(vec![5000.0, 6000.0, 7000.0]).unwrap();
        assert!(matches!(
            mass_density(&temp, &pressure(vec![1.0, 2.0]), &CONSTANTS),
            Err(AtmosphereError::InvalidConfiguration(_))
        ));
    }
}
