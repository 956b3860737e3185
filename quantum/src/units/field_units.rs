use serde::{Deserialize, Serialize};

use super::Unit;

pub trait FieldUnit: Unit {}

/// Struct for representing magnetic field unit values
/// # Examples
/// ```
/// use quantum::units::field_units::{Gauss, MagneticField, MilliTesla};
/// let field = MagneticField(5.0, MilliTesla);
/// assert_eq!(field.to_gauss(), 50.0);
/// assert_eq!(field.to(Gauss).value(), 50.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagneticField<U: FieldUnit>(pub f64, pub U);

impl<U: FieldUnit> MagneticField<U> {
    pub fn to_gauss(&self) -> f64 {
        self.1.to_base(self.0)
    }

    pub fn to<V: FieldUnit>(&self, unit: V) -> MagneticField<V> {
        MagneticField(self.1.to_base(self.0) / unit.to_base(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauss;

impl Unit for Gauss {
    const TO_BASE_MUL: f64 = 1.0;
}
impl FieldUnit for Gauss {}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilliTesla;

impl Unit for MilliTesla {
    const TO_BASE_MUL: f64 = 10.0;
}
impl FieldUnit for MilliTesla {}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tesla;

impl Unit for Tesla {
    const TO_BASE_MUL: f64 = 1e4;
}
impl FieldUnit for Tesla {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn field_units() {
        let earth = MagneticField(0.5, Gauss);
        assert_relative_eq!(earth.to(Tesla).value(), 5e-5);
        assert_relative_eq!(earth.to(MilliTesla).value(), 0.05);

        let magnet = MagneticField(1.0, Tesla);
        assert_relative_eq!(magnet.to_gauss(), 1e4);
    }
}
