use serde::{Deserialize, Serialize};

use super::Unit;

pub trait EnergyUnit: Unit {}

/// Struct for representing energy unit values
/// # Examples
/// ```
/// use quantum::units::energy_units::{Energy, GHz, MHz};
/// let energy_ghz = Energy(2.87, GHz);
/// let energy_mhz = energy_ghz.to(MHz);
/// assert!((energy_mhz.value() - 2870.0).abs() < 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Energy<U: EnergyUnit>(pub f64, pub U);

impl<U: EnergyUnit> Energy<U> {
    pub fn to_mhz(&self) -> f64 {
        self.1.to_base(self.0)
    }

    pub fn to<V: EnergyUnit>(&self, unit: V) -> Energy<V> {
        Energy(self.1.to_base(self.0) / unit.to_base(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hz;

impl Unit for Hz {
    const TO_BASE_MUL: f64 = 1e-6;
}
impl EnergyUnit for Hz {}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct KHz;

impl Unit for KHz {
    const TO_BASE_MUL: f64 = 1e-3;
}
impl EnergyUnit for KHz {}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MHz;

impl Unit for MHz {
    const TO_BASE_MUL: f64 = 1.0;
}
impl EnergyUnit for MHz {}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GHz;

impl Unit for GHz {
    const TO_BASE_MUL: f64 = 1e3;
}
impl EnergyUnit for GHz {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn energy_units() {
        let splitting = Energy(2870.0, MHz);
        let splitting_ghz = splitting.to(GHz);
        assert_relative_eq!(splitting_ghz.value(), 2.87);
        assert_relative_eq!(splitting_ghz.to_mhz(), splitting.to_mhz());

        let strain = Energy(5.0, MHz).to(KHz);
        assert_relative_eq!(strain.value(), 5000.0);
        assert_relative_eq!(strain.to(Hz).value(), 5e6);
    }
}
