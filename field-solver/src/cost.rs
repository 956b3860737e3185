use argmin::core::CostFunction;
use argmin_math::Error;
use nv_center::ResonanceCalculator;
use quantum::vector::Vector3D;
use serde::{Deserialize, Serialize};

/// How measured resonances are paired with the 8 calculated ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthPolicy {
    /// Pair by position and ignore values beyond the shorter list.
    #[default]
    Truncate,
    /// Require exactly 8 measured resonances.
    Exact,
}

/// Sum of squared differences over the positionally paired values.
pub fn squared_residual(measured: &[f64], calculated: &[f64]) -> f64 {
    measured
        .iter()
        .zip(calculated)
        .map(|(m, c)| (m - c).powi(2))
        .sum()
}

/// Mismatch between measured resonances, sorted ascending,
/// and the sorted resonances of a candidate lab frame field.
#[derive(Clone, Debug)]
pub struct ResonanceMismatch {
    calculator: ResonanceCalculator,
    measured: Vec<f64>,
}

impl ResonanceMismatch {
    pub fn new(calculator: ResonanceCalculator, measured: Vec<f64>) -> Self {
        Self {
            calculator,
            measured,
        }
    }

    pub fn measured(&self) -> &[f64] {
        &self.measured
    }

    pub fn residual(&self, field: &Vector3D) -> f64 {
        squared_residual(&self.measured, &self.calculator.sorted_resonances(field))
    }
}

impl CostFunction for ResonanceMismatch {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        let &[x, y, z] = param.as_slice() else {
            return Err(Error::msg(format!(
                "field has 3 components, got {} parameters",
                param.len()
            )));
        };

        Ok(self.residual(&Vector3D::new(x, y, z)))
    }
}
