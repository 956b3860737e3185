pub mod energy_units;
pub mod field_units;

pub use energy_units::{Energy, GHz, Hz, KHz, MHz};
pub use field_units::{Gauss, MagneticField, MilliTesla, Tesla};

/// Trait for units that can be converted to the base unit of their quantity.
///
/// Energies are based on MHz and magnetic fields on Gauss,
/// the natural units of the NV spin Hamiltonian.
pub trait Unit: Copy + Clone {
    const TO_BASE_MUL: f64;

    fn to_base(&self, value: f64) -> f64 {
        value * Self::TO_BASE_MUL
    }
}
