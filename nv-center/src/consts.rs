use quantum::units::{
    energy_units::{Energy, EnergyUnit},
    MHz,
};
use serde::{Deserialize, Serialize};

/// Physical constants of the NV ground state spin Hamiltonian.
///
/// The values are fixed once a solver is built from them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NvConstants {
    /// Zero-field splitting D in MHz
    pub zero_field_splitting: f64,
    /// Zero-field splitting asymmetry E in MHz
    pub asymmetry: f64,
    /// Electron gyromagnetic ratio in MHz / Gauss
    pub gyromagnetic_ratio: f64,
}

impl NvConstants {
    pub const ZERO_FIELD_SPLITTING_MHZ: f64 = 2870.0;
    pub const ASYMMETRY_MHZ: f64 = 5.0;
    pub const GYROMAGNETIC_RATIO: f64 = 2.8;

    pub fn with_zero_field_splitting<U: EnergyUnit>(mut self, splitting: Energy<U>) -> Self {
        self.zero_field_splitting = splitting.to(MHz).value();

        self
    }

    pub fn with_asymmetry<U: EnergyUnit>(mut self, asymmetry: Energy<U>) -> Self {
        self.asymmetry = asymmetry.to(MHz).value();

        self
    }

    /// Sets the gyromagnetic ratio in MHz / Gauss.
    pub fn with_gyromagnetic_ratio(mut self, ratio: f64) -> Self {
        self.gyromagnetic_ratio = ratio;

        self
    }
}

impl Default for NvConstants {
    fn default() -> Self {
        Self {
            zero_field_splitting: Self::ZERO_FIELD_SPLITTING_MHZ,
            asymmetry: Self::ASYMMETRY_MHZ,
            gyromagnetic_ratio: Self::GYROMAGNETIC_RATIO,
        }
    }
}
